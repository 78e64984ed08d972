//! The two base relations the rule engine queries.
//!
//! Both are built once from feed data and never mutated afterwards, so a
//! built [`Network`] can be shared between concurrent queries without
//! locking.

mod fares;
mod route_stops;

pub use fares::{FareRelation, InboundLeg, OutboundLeg};
pub use route_stops::RouteStopIndex;

use crate::domain::{FareFact, RouteId, StopId};

/// Route stop patterns and fares for one dataset.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub stops: RouteStopIndex,
    pub fares: FareRelation,
}

impl Network {
    /// Build both relations from raw inputs.
    pub fn build<R, S, F>(stops_by_route: R, facts: F) -> Self
    where
        R: IntoIterator<Item = (RouteId, S)>,
        S: IntoIterator<Item = StopId>,
        F: IntoIterator<Item = FareFact>,
    {
        Self {
            stops: RouteStopIndex::build(stops_by_route),
            fares: FareRelation::build(facts),
        }
    }
}
