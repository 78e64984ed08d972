//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{AvoidStopRoute, DirectRoute, Transfer1Route, Transfer2Route};
use crate::planner::QueryResult;

/// Request to query routes between two stops.
#[derive(Debug, Deserialize)]
pub struct RouteQueryRequest {
    /// Origin stop id
    pub start: String,

    /// Destination stop id
    pub end: String,

    /// Optional stop that direct routes must not visit
    pub avoid: Option<String>,
}

/// Ranked routes for one query.
#[derive(Debug, Serialize)]
pub struct RouteQueryResponse {
    /// Direct routes, most expensive first
    pub direct_routes: Vec<DirectRoute>,

    /// Chains with one transfer
    pub one_transfer: Vec<Transfer1Route>,

    /// Chains with two transfers
    pub two_transfer: Vec<Transfer2Route>,

    /// Direct routes avoiding the requested stop
    pub avoid_stop: Vec<AvoidStopRoute>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl From<QueryResult> for RouteQueryResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            direct_routes: result.direct_routes,
            one_transfer: result.one_transfer,
            two_transfer: result.two_transfer,
            avoid_stop: result.avoid_stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Price, RouteId, StopId};

    #[test]
    fn response_json_shape() {
        let result = QueryResult {
            direct_routes: vec![DirectRoute {
                route: RouteId::new(2044),
                price: Price::new(5.0).unwrap(),
            }],
            one_transfer: vec![Transfer1Route {
                route1: RouteId::new(2044),
                transfer_stop: StopId::new(148),
                route2: RouteId::new(488),
                price: Price::new(10.0).unwrap(),
            }],
            two_transfer: vec![],
            avoid_stop: vec![],
        };

        let json = serde_json::to_value(RouteQueryResponse::from(result)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "direct_routes": [{"route": 2044, "price": 5.0}],
                "one_transfer": [
                    {"route1": 2044, "transfer_stop": 148, "route2": 488, "price": 10.0}
                ],
                "two_transfer": [],
                "avoid_stop": []
            })
        );
    }
}
