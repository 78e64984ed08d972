//! Route to stop-pattern index.
//!
//! Holds each route's ordered stop sequence alongside a per-route set of the
//! same stops, so "does route R visit stop S" is a hash lookup rather than a
//! scan of the sequence.

use std::collections::{HashMap, HashSet};

use crate::domain::{RouteId, StopId};

/// A route's stop pattern.
#[derive(Debug, Clone, Default)]
struct StopPattern {
    /// Stops in sequence order, exactly as supplied.
    ordered: Vec<StopId>,
    /// The same stops, for membership checks.
    members: HashSet<StopId>,
}

impl StopPattern {
    fn new(ordered: Vec<StopId>) -> Self {
        let members = ordered.iter().copied().collect();
        Self { ordered, members }
    }
}

/// Immutable mapping from route to its ordered stops.
#[derive(Debug, Clone, Default)]
pub struct RouteStopIndex {
    patterns: HashMap<RouteId, StopPattern>,
}

impl RouteStopIndex {
    /// Build the index from routes and their stop sequences.
    ///
    /// Each sequence must already be in stop-sequence order; it is stored
    /// as given. If a route appears more than once the last sequence wins.
    pub fn build<I, S>(stops_by_route: I) -> Self
    where
        I: IntoIterator<Item = (RouteId, S)>,
        S: IntoIterator<Item = StopId>,
    {
        let patterns = stops_by_route
            .into_iter()
            .map(|(route, stops)| (route, StopPattern::new(stops.into_iter().collect())))
            .collect();

        Self { patterns }
    }

    /// Check whether a route visits a stop anywhere in its pattern.
    ///
    /// Unknown routes visit no stops.
    pub fn contains_stop(&self, route: RouteId, stop: StopId) -> bool {
        self.patterns
            .get(&route)
            .is_some_and(|p| p.members.contains(&stop))
    }

    /// Get a route's stops in sequence order.
    pub fn stops(&self, route: RouteId) -> &[StopId] {
        self.patterns
            .get(&route)
            .map(|p| p.ordered.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the number of indexed routes.
    pub fn route_count(&self) -> usize {
        self.patterns.len()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Membership agrees with a linear scan of the stored sequence
        #[test]
        fn contains_matches_scan(
            pattern in prop::collection::vec(0u32..50, 0..20),
            probe in 0u32..50,
        ) {
            let route = RouteId::new(1);
            let stops: Vec<StopId> = pattern.iter().copied().map(StopId::new).collect();
            let index = RouteStopIndex::build([(route, stops.clone())]);

            let probe = StopId::new(probe);
            prop_assert_eq!(index.contains_stop(route, probe), stops.contains(&probe));
            prop_assert_eq!(index.stops(route), stops.as_slice());
        }
    }
}
