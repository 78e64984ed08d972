//! Query configuration.

/// Configuration parameters for route queries.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Maximum number of routes returned per category.
    pub max_results: usize,
}

impl QueryConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { max_results: 5 }
    }
}
