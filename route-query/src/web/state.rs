//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::QueryConfig;

/// Shared application state.
///
/// The network is fully built before it is wrapped here and is never
/// mutated afterwards, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Route stop patterns and fares
    pub network: Arc<Network>,

    /// Query configuration
    pub config: Arc<QueryConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: QueryConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
