//! Route derivation rules.
//!
//! Each rule is a join over fare legs. Legs are chained on shared stops using
//! the per-stop indices in [`FareRelation`], and results are collected with
//! set semantics: a tuple produced twice (for example from duplicate fare
//! facts) is reported once, at the position it was first produced.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::{debug, trace};

use crate::domain::{AvoidStopRoute, DirectRoute, StopId, Transfer1Route, Transfer2Route};
use crate::network::{FareRelation, InboundLeg, Network, RouteStopIndex};

/// Insertion-ordered set of derived tuples.
struct Distinct<T> {
    seen: HashSet<T>,
    rows: Vec<T>,
}

impl<T: Copy + Eq + Hash> Distinct<T> {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            rows: Vec::new(),
        }
    }

    fn insert(&mut self, row: T) {
        if self.seen.insert(row) {
            self.rows.push(row);
        }
    }

    fn into_vec(self) -> Vec<T> {
        self.rows
    }
}

/// Evaluates the route rules against one network.
///
/// The engine only borrows the relations; it holds no state between calls,
/// so the same engine (or many engines over the same network) can serve any
/// number of queries.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    stops: &'a RouteStopIndex,
    fares: &'a FareRelation,
}

impl<'a> RuleEngine<'a> {
    /// Create an engine over the given relations.
    pub fn new(stops: &'a RouteStopIndex, fares: &'a FareRelation) -> Self {
        Self { stops, fares }
    }

    /// Create an engine over a built network.
    pub fn for_network(network: &'a Network) -> Self {
        Self::new(&network.stops, &network.fares)
    }

    /// Routes with a fare straight from `start` to `end`.
    ///
    /// Empty when `start == end`.
    pub fn direct(&self, start: StopId, end: StopId) -> Vec<DirectRoute> {
        if start == end {
            return Vec::new();
        }

        let mut out = Distinct::new();
        for leg in self.fares.by_origin(start) {
            if leg.destination == end {
                out.insert(DirectRoute {
                    route: leg.route,
                    price: leg.price,
                });
            }
        }

        let rows = out.into_vec();
        trace!(%start, %end, count = rows.len(), "direct routes");
        rows
    }

    /// Two-leg chains from `start` to `end` on different routes.
    ///
    /// The transfer stop is any stop reached by a leg from `start` that is
    /// also the origin of a leg into `end`.
    pub fn transfer1(&self, start: StopId, end: StopId) -> Vec<Transfer1Route> {
        let finishing = self.finishing_legs(end);
        let mut out = Distinct::new();

        for first in self.fares.by_origin(start) {
            let Some(lasts) = finishing.get(&first.destination) else {
                continue;
            };
            for last in lasts {
                if last.route == first.route {
                    continue;
                }
                out.insert(Transfer1Route {
                    route1: first.route,
                    transfer_stop: first.destination,
                    route2: last.route,
                    price: first.price + last.price,
                });
            }
        }

        let rows = out.into_vec();
        trace!(%start, %end, count = rows.len(), "one-transfer routes");
        rows
    }

    /// Three-leg chains from `start` to `end` using three distinct routes.
    pub fn transfer2(&self, start: StopId, end: StopId) -> Vec<Transfer2Route> {
        let finishing = self.finishing_legs(end);
        if finishing.is_empty() {
            return Vec::new();
        }

        let mut out = Distinct::new();
        let mut middle_legs_scanned = 0usize;

        for first in self.fares.by_origin(start) {
            for second in self.fares.by_origin(first.destination) {
                middle_legs_scanned += 1;
                if second.route == first.route {
                    continue;
                }
                let Some(lasts) = finishing.get(&second.destination) else {
                    continue;
                };
                for last in lasts {
                    if last.route == first.route || last.route == second.route {
                        continue;
                    }
                    out.insert(Transfer2Route {
                        route1: first.route,
                        stop1: first.destination,
                        route2: second.route,
                        stop2: second.destination,
                        route3: last.route,
                        price: first.price + second.price + last.price,
                    });
                }
            }
        }

        let rows = out.into_vec();
        trace!(
            %start,
            %end,
            middle_legs_scanned,
            count = rows.len(),
            "two-transfer routes"
        );
        rows
    }

    /// Direct routes from `start` to `end` whose stop pattern does not
    /// include `avoid`.
    ///
    /// A route with no known stop pattern is never excluded.
    pub fn avoid_stop(&self, start: StopId, end: StopId, avoid: StopId) -> Vec<AvoidStopRoute> {
        let direct = self.direct(start, end);
        let before = direct.len();

        let rows: Vec<AvoidStopRoute> = direct
            .into_iter()
            .filter(|d| !self.stops.contains_stop(d.route, avoid))
            .collect();

        debug!(
            %start,
            %end,
            %avoid,
            excluded = before - rows.len(),
            "avoid-stop routes"
        );
        rows
    }

    /// Legs arriving at `end`, grouped by the stop they depart from.
    fn finishing_legs(&self, end: StopId) -> HashMap<StopId, Vec<&'a InboundLeg>> {
        let mut grouped: HashMap<StopId, Vec<&'a InboundLeg>> = HashMap::new();
        for leg in self.fares.by_destination(end) {
            grouped.entry(leg.origin).or_default().push(leg);
        }
        grouped
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
