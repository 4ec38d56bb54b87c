//! Search configuration for the fare engine.

use chrono::{Duration, NaiveDate};

use crate::domain::{CurrencyCode, IataCode};

/// The trip being searched for: explicit parameters, passed into the
/// pipeline entry point so the same engine serves a CLI, a service, or
/// a test harness without edits.
#[derive(Debug, Clone)]
pub struct TripQuery {
    /// Origin airport
    pub origin: IataCode,

    /// Final destination airport
    pub destination: IataCode,

    /// Outbound travel date
    pub departure_date: NaiveDate,

    /// Return travel date
    pub return_date: NaiveDate,

    /// Currency for all priced results; one currency per run
    pub currency: CurrencyCode,

    /// Number of travellers
    pub passengers: u32,
}

/// Where the candidate hub set comes from.
///
/// Discovered hubs may either stand alone or supplement a configured
/// list; the choice is explicit, never inferred.
#[derive(Debug, Clone)]
pub enum HubSource {
    /// A fixed, caller-supplied list of hubs
    Static(Vec<IataCode>),

    /// Hubs inferred from direct-route search results
    Discovered,

    /// Union of discovered hubs and a caller-supplied list
    DiscoveredPlusStatic(Vec<IataCode>),
}

/// How many hubs a journey connects through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPlan {
    /// origin -> hub -> destination
    OneStop,

    /// origin -> hub -> hub -> destination
    TwoStop,
}

/// Tunable parameters for a search run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum time between a leg's arrival and the next leg's
    /// departure (minutes). Connections at or under this are rejected.
    pub min_connection_mins: i64,

    /// Maximum offers fetched per (airport-pair, date) leg search.
    pub offers_per_leg: u32,

    /// Maximum offers examined per hub-discovery call.
    pub discovery_offer_cap: u32,

    /// Maximum number of round trips to return after ranking.
    pub max_results: usize,

    /// Where the hub candidates come from.
    pub hub_source: HubSource,

    /// One or two connecting hubs per direction.
    pub connection_plan: ConnectionPlan,
}

impl EngineConfig {
    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 90,
            offers_per_leg: 10,
            discovery_offer_cap: 25,
            max_results: 5,
            hub_source: HubSource::Discovered,
            connection_plan: ConnectionPlan::OneStop,
        }
    }
}
