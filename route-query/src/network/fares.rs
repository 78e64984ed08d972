//! Fare relation indexed for joins.
//!
//! Every fare fact is indexed twice: once under its origin stop and once
//! under its destination stop. The rule engine joins legs on shared stops,
//! so both directions are needed and neither should cost a full scan.

use std::collections::HashMap;

use crate::domain::{FareFact, Price, RouteId, StopId};

/// A fare leg departing a known stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundLeg {
    pub route: RouteId,
    pub destination: StopId,
    pub price: Price,
}

/// A fare leg arriving at a known stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundLeg {
    pub route: RouteId,
    pub origin: StopId,
    pub price: Price,
}

/// Immutable collection of fare facts.
///
/// Duplicates are kept: two identical facts show up as two matching legs.
#[derive(Debug, Clone, Default)]
pub struct FareRelation {
    /// Map from stop -> legs departing it, in input order.
    by_origin: HashMap<StopId, Vec<OutboundLeg>>,

    /// Map from stop -> legs arriving at it, in input order.
    by_destination: HashMap<StopId, Vec<InboundLeg>>,

    fact_count: usize,
}

impl FareRelation {
    /// Build the relation from fare facts.
    pub fn build<I>(facts: I) -> Self
    where
        I: IntoIterator<Item = FareFact>,
    {
        let mut by_origin: HashMap<StopId, Vec<OutboundLeg>> = HashMap::new();
        let mut by_destination: HashMap<StopId, Vec<InboundLeg>> = HashMap::new();
        let mut fact_count = 0;

        for fact in facts {
            by_origin.entry(fact.origin).or_default().push(OutboundLeg {
                route: fact.route,
                destination: fact.destination,
                price: fact.price,
            });
            by_destination
                .entry(fact.destination)
                .or_default()
                .push(InboundLeg {
                    route: fact.route,
                    origin: fact.origin,
                    price: fact.price,
                });
            fact_count += 1;
        }

        Self {
            by_origin,
            by_destination,
            fact_count,
        }
    }

    /// Get all legs departing a stop.
    pub fn by_origin(&self, stop: StopId) -> &[OutboundLeg] {
        self.by_origin
            .get(&stop)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get all legs arriving at a stop.
    pub fn by_destination(&self, stop: StopId) -> &[InboundLeg] {
        self.by_destination
            .get(&stop)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the number of fare facts, duplicates included.
    pub fn fact_count(&self) -> usize {
        self.fact_count
    }
}
