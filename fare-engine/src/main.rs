use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fare_engine::amadeus::{AmadeusClient, AmadeusConfig};
use fare_engine::domain::{CurrencyCode, IataCode};
use fare_engine::engine::{
    ConnectionPlan, EngineConfig, HubSource, TripQuery, search_round_trips,
};
use fare_engine::report::render_outcome;

/// Search for round-trip fares assembled from one-way legs through
/// connecting hub airports.
#[derive(Debug, Parser)]
#[command(name = "fare-engine", version, about)]
struct Cli {
    /// Origin airport (IATA code)
    origin: String,

    /// Destination airport (IATA code)
    destination: String,

    /// Outbound date (YYYY-MM-DD)
    #[arg(long)]
    depart: NaiveDate,

    /// Return date (YYYY-MM-DD)
    #[arg(long = "return")]
    return_date: NaiveDate,

    /// Currency for all prices
    #[arg(long, default_value = "USD")]
    currency: String,

    /// Connecting hub to search through (repeatable)
    #[arg(long = "hub")]
    hubs: Vec<String>,

    /// Also discover hubs from direct-route search results
    #[arg(long)]
    discover_hubs: bool,

    /// Minimum connection time in minutes
    #[arg(long, default_value_t = 90)]
    min_connection_mins: i64,

    /// Maximum offers fetched per leg search
    #[arg(long, default_value_t = 10)]
    offers_per_leg: u32,

    /// Number of travellers
    #[arg(long, default_value_t = 1)]
    passengers: u32,

    /// Maximum number of round trips to show
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Search journeys with two connecting hubs instead of one
    #[arg(long)]
    two_stop: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let (Ok(api_key), Ok(api_secret)) = (
        std::env::var("AMADEUS_API_KEY"),
        std::env::var("AMADEUS_API_SECRET"),
    ) else {
        eprintln!("Error: AMADEUS_API_KEY and AMADEUS_API_SECRET must be set.");
        return ExitCode::FAILURE;
    };

    let origin = match IataCode::parse(&cli.origin) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: invalid origin: {e}");
            return ExitCode::FAILURE;
        }
    };
    let destination = match IataCode::parse(&cli.destination) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: invalid destination: {e}");
            return ExitCode::FAILURE;
        }
    };
    let currency = match CurrencyCode::parse(&cli.currency) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: invalid currency: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut hubs = Vec::with_capacity(cli.hubs.len());
    for raw in &cli.hubs {
        match IataCode::parse(raw) {
            Ok(code) => hubs.push(code),
            Err(e) => {
                eprintln!("Error: invalid hub {raw:?}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let hub_source = match (hubs.is_empty(), cli.discover_hubs) {
        (true, true) => HubSource::Discovered,
        (false, true) => HubSource::DiscoveredPlusStatic(hubs),
        (false, false) => HubSource::Static(hubs),
        (true, false) => {
            eprintln!("Error: supply at least one --hub, or pass --discover-hubs.");
            return ExitCode::FAILURE;
        }
    };

    let query = TripQuery {
        origin,
        destination,
        departure_date: cli.depart,
        return_date: cli.return_date,
        currency,
        passengers: cli.passengers,
    };

    let config = EngineConfig {
        min_connection_mins: cli.min_connection_mins,
        offers_per_leg: cli.offers_per_leg,
        max_results: cli.top,
        hub_source,
        connection_plan: if cli.two_stop {
            ConnectionPlan::TwoStop
        } else {
            ConnectionPlan::OneStop
        },
        ..EngineConfig::default()
    };

    let client = match AmadeusClient::new(AmadeusConfig::new(api_key, api_secret)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: failed to create Amadeus client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = search_round_trips(&client, &query, &config).await;
    print!("{}", render_outcome(&outcome, &query));

    ExitCode::SUCCESS
}
