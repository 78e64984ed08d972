use std::net::SocketAddr;

use route_query::domain::StopId;
use route_query::feed::Feed;
use route_query::planner::{Planner, QueryConfig, QueryResult, RouteQuery};
use route_query::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// Feed directory used when `GTFS_DIR` is not set.
const DEFAULT_GTFS_DIR: &str = "./GTFS";

/// Listen address used when `BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // START END [AVOID] on the command line runs a single query
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli_query = (!args.is_empty()).then(|| {
        parse_query_args(&args).unwrap_or_else(|message| {
            eprintln!("{message}");
            eprintln!("Usage: route-query [START END [AVOID]]");
            std::process::exit(2);
        })
    });

    let gtfs_dir = std::env::var("GTFS_DIR").unwrap_or_else(|_| DEFAULT_GTFS_DIR.to_string());
    let feed = Feed::load(&gtfs_dir).expect("Failed to load GTFS feed");
    let network = feed.to_network();
    let config = QueryConfig::default();

    if let Some(query) = cli_query {
        let result = Planner::new(&network, &config).query(&query);
        print_result(&result);
        return;
    }

    let state = AppState::new(network, config);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR must be a socket address");

    tracing::info!(%addr, "route query server listening");
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /routes/query  - Query routes (?start=..&end=..&avoid=..)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

fn parse_query_args(args: &[String]) -> Result<RouteQuery, String> {
    let stop = |s: &String| StopId::parse(s).map_err(|e| e.to_string());
    match args {
        [start, end] => Ok(RouteQuery::new(stop(start)?, stop(end)?, None)),
        [start, end, avoid] => Ok(RouteQuery::new(stop(start)?, stop(end)?, Some(stop(avoid)?))),
        _ => Err(format!("expected 2 or 3 stop ids, got {}", args.len())),
    }
}

fn print_result(result: &QueryResult) {
    let direct = result
        .direct_routes
        .iter()
        .map(|r| format!("({}, {})", r.route, r.price));
    let one = result
        .one_transfer
        .iter()
        .map(|r| format!("({}, {}, {}, {})", r.route1, r.transfer_stop, r.route2, r.price));
    let two = result.two_transfer.iter().map(|r| {
        format!(
            "({}, {}, {}, {}, {}, {})",
            r.route1, r.stop1, r.route2, r.stop2, r.route3, r.price
        )
    });
    let avoid = result
        .avoid_stop
        .iter()
        .map(|r| format!("({}, {})", r.route, r.price));

    println!("Direct routes: [{}]", direct.collect::<Vec<_>>().join(", "));
    println!("1-transfer: [{}]", one.collect::<Vec<_>>().join(", "));
    println!("2-transfer: [{}]", two.collect::<Vec<_>>().join(", "));
    println!("Avoid Stop: [{}]", avoid.collect::<Vec<_>>().join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn start_and_end() {
        let query = parse_query_args(&args(&["146", "148"])).unwrap();

        assert_eq!(query, RouteQuery::new(StopId::new(146), StopId::new(148), None));
    }

    #[test]
    fn with_avoided_stop() {
        let query = parse_query_args(&args(&["146", "148", "233"])).unwrap();

        assert_eq!(query.avoid, Some(StopId::new(233)));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = parse_query_args(&args(&["146"])).unwrap_err();
        assert_eq!(err, "expected 2 or 3 stop ids, got 1");

        assert!(parse_query_args(&args(&["1", "2", "3", "4"])).is_err());
    }

    #[test]
    fn non_numeric_stop_is_rejected() {
        let err = parse_query_args(&args(&["146", "north"])).unwrap_err();

        assert!(err.contains("\"north\""));
    }
}
