//! Route query planner.
//!
//! Answers: "from this stop to that stop, which routes can I take with zero,
//! one or two transfers, and which direct routes skip a given stop?"
//!
//! Routes are derived by joining fare legs on shared stops, then each
//! category is ranked by price and truncated.

mod config;
mod query;
mod rank;
mod rules;

pub use config::QueryConfig;
pub use query::{Planner, QueryResult, RouteQuery};
pub use rank::rank;
pub use rules::RuleEngine;
