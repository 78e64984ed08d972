//! Feed loading error types.

use std::path::PathBuf;

use crate::domain::{InvalidId, InvalidPrice};

/// Errors that can occur when loading a GTFS feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// File missing, unreadable, or not valid CSV for the expected columns
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A route or stop identifier did not parse
    #[error("bad identifier in {file}: {source}")]
    InvalidId {
        file: &'static str,
        #[source]
        source: InvalidId,
    },

    /// A fare price was negative or not a finite number
    #[error("bad price for fare {fare_id} in {file}: {source}")]
    InvalidPrice {
        file: &'static str,
        fare_id: String,
        #[source]
        source: InvalidPrice,
    },
}
