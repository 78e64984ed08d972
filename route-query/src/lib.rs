//! Transit route query engine.
//!
//! Answers: "how can I get from this stop to that one with at most two
//! transfers, and which direct routes skip a stop I want to avoid?"
//! Routes are derived from a GTFS feed's fare rules and stop patterns.

pub mod domain;
pub mod feed;
pub mod network;
pub mod planner;
pub mod web;
