//! Derived route records produced by the rule engine.
//!
//! These are query-scoped values: they are built for one query, ranked,
//! and dropped. Each carries its total price as the trailing field, which
//! is what ranking sorts on.

use serde::Serialize;

use super::{Price, RouteId, StopId};

/// Anything with a total price that can be ranked.
pub trait Priced {
    fn price(&self) -> Price;
}

/// A single route running from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DirectRoute {
    pub route: RouteId,
    pub price: Price,
}

/// A direct route whose stop pattern never visits the avoided stop.
pub type AvoidStopRoute = DirectRoute;

/// Two routes joined at one transfer stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Transfer1Route {
    pub route1: RouteId,
    pub transfer_stop: StopId,
    pub route2: RouteId,
    pub price: Price,
}

/// Three routes joined at two transfer stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Transfer2Route {
    pub route1: RouteId,
    pub stop1: StopId,
    pub route2: RouteId,
    pub stop2: StopId,
    pub route3: RouteId,
    pub price: Price,
}

impl Priced for DirectRoute {
    fn price(&self) -> Price {
        self.price
    }
}

impl Priced for Transfer1Route {
    fn price(&self) -> Price {
        self.price
    }
}

impl Priced for Transfer2Route {
    fn price(&self) -> Price {
        self.price
    }
}
