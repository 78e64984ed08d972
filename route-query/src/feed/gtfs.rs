//! GTFS file rows and readers.
//!
//! Only the columns the query engine needs are deserialised; any other
//! columns in the files are ignored.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::FeedError;

pub(super) const STOP_TIMES: &str = "stop_times.txt";
pub(super) const TRIPS: &str = "trips.txt";
pub(super) const FARE_RULES: &str = "fare_rules.txt";
pub(super) const FARE_ATTRIBUTES: &str = "fare_attributes.txt";

#[derive(Debug, Deserialize)]
pub(super) struct StopTimeRow {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct TripRow {
    pub trip_id: String,
    pub route_id: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct FareRuleRow {
    pub fare_id: String,
    #[serde(default)]
    pub route_id: Option<String>,
    #[serde(default)]
    pub origin_id: Option<String>,
    #[serde(default)]
    pub destination_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FareAttributeRow {
    pub fare_id: String,
    pub price: f64,
}

/// Read every row of a feed file.
pub(super) fn read_rows<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, FeedError> {
    let path = dir.join(file);
    let csv_err = |source| FeedError::Csv {
        path: path.clone(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(csv_err)?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(csv_err)
}
