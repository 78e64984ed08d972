//! GTFS feed loading.
//!
//! Turns the four GTFS files the engine cares about into the two base
//! relations:
//!
//! - route stop patterns, from `stop_times.txt` joined with `trips.txt`
//! - point-to-point fares, from `fare_rules.txt` joined with
//!   `fare_attributes.txt`
//!
//! Output is keyed by ordered maps so the built relations (and therefore
//! query enumeration order) do not depend on file row order.

mod error;
mod gtfs;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{FareFact, Price, RouteId, StopId};
use crate::network::Network;

pub use error::FeedError;
use gtfs::{
    FARE_ATTRIBUTES, FARE_RULES, FareAttributeRow, FareRuleRow, STOP_TIMES, StopTimeRow, TRIPS,
    TripRow, read_rows,
};

/// Key of a fare: (route, origin, destination).
pub type FareKey = (RouteId, StopId, StopId);

/// Base relations read from a GTFS feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    /// Each route's stops, ordered by stop sequence.
    pub route_stops: BTreeMap<RouteId, Vec<StopId>>,

    /// Price per (route, origin, destination).
    pub fares: BTreeMap<FareKey, Price>,
}

impl Feed {
    /// Load a feed from a directory of GTFS files.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, FeedError> {
        let dir = dir.as_ref();

        let trips: Vec<TripRow> = read_rows(dir, TRIPS)?;
        let stop_times: Vec<StopTimeRow> = read_rows(dir, STOP_TIMES)?;
        let route_stops = build_route_stops(trips, stop_times)?;

        let rules: Vec<FareRuleRow> = read_rows(dir, FARE_RULES)?;
        let attributes: Vec<FareAttributeRow> = read_rows(dir, FARE_ATTRIBUTES)?;
        let fares = build_fares(rules, attributes)?;

        info!(
            dir = %dir.display(),
            routes = route_stops.len(),
            fares = fares.len(),
            "loaded feed"
        );

        Ok(Self { route_stops, fares })
    }

    /// Fare facts in key order.
    pub fn fare_facts(&self) -> impl Iterator<Item = FareFact> + '_ {
        self.fares
            .iter()
            .map(|(&(route, origin, destination), &price)| {
                FareFact::new(route, origin, destination, price)
            })
    }

    /// Build the query relations from this feed.
    pub fn to_network(&self) -> Network {
        let network = Network::build(
            self.route_stops
                .iter()
                .map(|(route, stops)| (*route, stops.iter().copied())),
            self.fare_facts(),
        );
        debug!(
            routes = network.stops.route_count(),
            fares = network.fares.fact_count(),
            "built network"
        );
        network
    }
}

/// Join stop times to trips and collect each route's ordered stops.
///
/// All trips of a route contribute to its pattern; stops are ordered by
/// `(stop_sequence, stop_id)`. Stop times whose trip is unknown are dropped.
fn build_route_stops(
    trips: Vec<TripRow>,
    stop_times: Vec<StopTimeRow>,
) -> Result<BTreeMap<RouteId, Vec<StopId>>, FeedError> {
    let mut trip_routes: HashMap<String, RouteId> = HashMap::with_capacity(trips.len());
    for trip in trips {
        let route = RouteId::parse(&trip.route_id).map_err(|source| FeedError::InvalidId {
            file: TRIPS,
            source,
        })?;
        trip_routes.insert(trip.trip_id, route);
    }

    let mut sequenced: BTreeMap<RouteId, Vec<(u32, StopId)>> = BTreeMap::new();
    let mut orphaned = 0usize;

    for row in stop_times {
        let Some(&route) = trip_routes.get(&row.trip_id) else {
            orphaned += 1;
            continue;
        };
        let stop = StopId::parse(&row.stop_id).map_err(|source| FeedError::InvalidId {
            file: STOP_TIMES,
            source,
        })?;
        sequenced
            .entry(route)
            .or_default()
            .push((row.stop_sequence, stop));
    }

    if orphaned > 0 {
        warn!(orphaned, "skipped stop times for unknown trips");
    }

    Ok(sequenced
        .into_iter()
        .map(|(route, mut stops)| {
            stops.sort_unstable();
            (route, stops.into_iter().map(|(_, stop)| stop).collect())
        })
        .collect())
}

/// Join fare rules to fare attributes.
///
/// Rules without a route, origin or destination, or naming an unknown fare,
/// are skipped. When several rules share a key the last one wins.
fn build_fares(
    rules: Vec<FareRuleRow>,
    attributes: Vec<FareAttributeRow>,
) -> Result<BTreeMap<FareKey, Price>, FeedError> {
    let mut prices: HashMap<String, Price> = HashMap::with_capacity(attributes.len());
    for attr in attributes {
        let price = Price::new(attr.price).map_err(|source| FeedError::InvalidPrice {
            file: FARE_ATTRIBUTES,
            fare_id: attr.fare_id.clone(),
            source,
        })?;
        prices.insert(attr.fare_id, price);
    }

    let parse_stop = |s: &str| {
        StopId::parse(s).map_err(|source| FeedError::InvalidId {
            file: FARE_RULES,
            source,
        })
    };

    let mut fares = BTreeMap::new();
    let mut incomplete = 0usize;
    let mut unpriced = 0usize;

    for rule in rules {
        let (Some(route), Some(origin), Some(destination)) =
            (&rule.route_id, &rule.origin_id, &rule.destination_id)
        else {
            incomplete += 1;
            continue;
        };
        let Some(&price) = prices.get(&rule.fare_id) else {
            debug!(fare_id = %rule.fare_id, "fare rule references unknown fare");
            unpriced += 1;
            continue;
        };

        let route = RouteId::parse(route).map_err(|source| FeedError::InvalidId {
            file: FARE_RULES,
            source,
        })?;
        let key = (route, parse_stop(origin.as_str())?, parse_stop(destination.as_str())?);
        fares.insert(key, price);
    }

    if incomplete > 0 {
        warn!(
            incomplete,
            "skipped fare rules without route, origin and destination"
        );
    }
    if unpriced > 0 {
        warn!(unpriced, "skipped fare rules with unknown fare_id");
    }

    Ok(fares)
}
