//! simple: end-to-end walk through the transit catalogue.
//!
//! Builds a hand-written network, compiles it once, and answers a fixed
//! batch of route, stop, and itinerary queries.  Set `RUST_LOG=debug` to
//! watch the catalogue and compiler at work.

mod network;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use tc_router::{GraphCompiler, RequestHandler, RoutingSettings};

use network::build_catalogue;

const ROUTING_SETTINGS_JSON: &str = r#"{ "bus_wait_time": 6, "bus_velocity": 40 }"#;

const BUS_QUERIES:  &[&str] = &["297", "635", "828", "751"];
const STOP_QUERIES: &[&str] = &["Universam", "Rasskazovka", "Tsaritsyno", "Samara"];
const PATH_QUERIES: &[(&str, &str)] = &[
    ("Biryulyovo Zapadnoye", "Universam"),
    ("Biryusinka",           "Rasskazovka"),
    ("Universam",            "Universam"),
    ("Rasskazovka",          "Biryulyovo Tovarnaya"),
    ("Universam",            "Tsaritsyno"),
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(EnvFilter::from_default_env()))
        .init();

    let settings: RoutingSettings =
        serde_json::from_str(ROUTING_SETTINGS_JSON).context("parsing routing settings")?;

    // 1. Populate.
    let catalogue = build_catalogue()?;
    info!(stops = catalogue.stop_count(), routes = catalogue.route_count(), "catalogue ready");

    // 2. Compile once.
    let network = GraphCompiler::new(settings)?.compile(&catalogue)?;
    println!(
        "Graph: {} vertices, {} edges (wait {} min, {} km/h)",
        network.vertex_count(),
        network.edge_count(),
        network.settings().bus_wait_time,
        network.settings().bus_velocity,
    );
    println!();

    // 3. Query.
    let handler = RequestHandler::new(&catalogue, &network);

    for &bus in BUS_QUERIES {
        match handler.bus_stat(bus)? {
            Some(s) => println!(
                "Bus {bus}: {} stops on route, {} unique stops, {} m route length, {:.6} curvature",
                s.stop_count, s.unique_stop_count, s.route_length, s.curvature
            ),
            None => println!("Bus {bus}: not found"),
        }
    }
    println!();

    for &stop in STOP_QUERIES {
        match handler.buses_by_stop(stop) {
            None => println!("Stop {stop}: not found"),
            Some(buses) if buses.is_empty() => println!("Stop {stop}: no buses"),
            Some(buses) => {
                let list: Vec<&str> = buses.into_iter().collect();
                println!("Stop {stop}: buses {}", list.join(" "));
            }
        }
    }
    println!();

    for &(from, to) in PATH_QUERIES {
        match handler.route(from, to)? {
            None => println!("{from} -> {to}: no path"),
            Some(itinerary) => {
                println!("{from} -> {to}: {:.2} min", itinerary.total_time);
                for leg in &itinerary.legs {
                    println!("  wait {} min at {}", itinerary.wait_time, leg.board_stop);
                    println!(
                        "  bus {} for {} stop(s) to {}, {:.2} min",
                        leg.route, leg.span_count, leg.alight_stop, leg.ride_time
                    );
                }
                println!("{}", serde_json::to_string(&itinerary)?);
            }
        }
    }

    Ok(())
}
