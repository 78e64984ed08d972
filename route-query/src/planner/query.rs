//! Query orchestration.
//!
//! Runs the four rules for one (start, end, avoid) query and ranks each
//! category independently.

use tracing::debug;

use crate::domain::{AvoidStopRoute, DirectRoute, StopId, Transfer1Route, Transfer2Route};
use crate::network::Network;

use super::config::QueryConfig;
use super::rank::rank;
use super::rules::RuleEngine;

/// A route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteQuery {
    /// Stop the journey starts at.
    pub start: StopId,

    /// Stop the journey ends at.
    pub end: StopId,

    /// Stop that direct routes must not pass through, if any.
    pub avoid: Option<StopId>,
}

impl RouteQuery {
    /// Create a new query.
    pub fn new(start: StopId, end: StopId, avoid: Option<StopId>) -> Self {
        Self { start, end, avoid }
    }
}

/// Ranked routes for one query, by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub direct_routes: Vec<DirectRoute>,
    pub one_transfer: Vec<Transfer1Route>,
    pub two_transfer: Vec<Transfer2Route>,
    /// Empty when the query named no stop to avoid.
    pub avoid_stop: Vec<AvoidStopRoute>,
}

impl QueryResult {
    /// Returns true if no category has any route.
    pub fn is_empty(&self) -> bool {
        self.direct_routes.is_empty()
            && self.one_transfer.is_empty()
            && self.two_transfer.is_empty()
            && self.avoid_stop.is_empty()
    }
}

/// Answers route queries against one network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a QueryConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a QueryConfig) -> Self {
        Self { network, config }
    }

    /// Run all four rules for the query and rank each category.
    pub fn query(&self, query: &RouteQuery) -> QueryResult {
        let engine = RuleEngine::for_network(self.network);
        let top = self.config.max_results;

        let direct_routes = engine.direct(query.start, query.end);
        let one_transfer = engine.transfer1(query.start, query.end);
        let two_transfer = engine.transfer2(query.start, query.end);
        let avoid_stop = match query.avoid {
            Some(avoid) => engine.avoid_stop(query.start, query.end, avoid),
            None => Vec::new(),
        };

        debug!(
            start = %query.start,
            end = %query.end,
            avoid = ?query.avoid,
            direct = direct_routes.len(),
            one_transfer = one_transfer.len(),
            two_transfer = two_transfer.len(),
            avoid_stop = avoid_stop.len(),
            "route candidates before ranking"
        );

        QueryResult {
            direct_routes: rank(direct_routes, top),
            one_transfer: rank(one_transfer, top),
            two_transfer: rank(two_transfer, top),
            avoid_stop: rank(avoid_stop, top),
        }
    }
}
