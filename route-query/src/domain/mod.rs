//! Domain types for the route query engine.
//!
//! Identifiers and prices enforce their invariants at construction time,
//! so the relations and rule engine can trust every value they receive.

mod fare;
mod ids;
mod itinerary;
mod price;

pub use fare::FareFact;
pub use ids::{InvalidId, RouteId, StopId};
pub use itinerary::{AvoidStopRoute, DirectRoute, Priced, Transfer1Route, Transfer2Route};
pub use price::{InvalidPrice, Price};
