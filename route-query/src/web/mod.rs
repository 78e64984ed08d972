//! Web layer for the route query engine.
//!
//! Provides a JSON HTTP endpoint over the planner.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
