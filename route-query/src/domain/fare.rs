//! Fare facts.

use super::{Price, RouteId, StopId};

/// A directed, route-specific price quote from one stop to another.
///
/// Fares are not symmetric: a fact for `origin -> destination` says nothing
/// about the reverse direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FareFact {
    pub route: RouteId,
    pub origin: StopId,
    pub destination: StopId,
    pub price: Price,
}

impl FareFact {
    pub fn new(route: RouteId, origin: StopId, destination: StopId, price: Price) -> Self {
        Self {
            route,
            origin,
            destination,
            price,
        }
    }
}
