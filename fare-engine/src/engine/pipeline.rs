//! The end-to-end search pipeline.
//!
//! Resolves the hub set, fetches every leg group, combines each
//! direction, assembles round trips, and ranks them. Every empty stage
//! is a reported outcome, never an error: the run always completes.

use futures::join;
use tracing::info;

use crate::domain::{HubSet, RoundTrip};

use super::combine::{assemble_round_trips, combine_one_stop, combine_two_stop};
use super::config::{ConnectionPlan, EngineConfig, HubSource, TripQuery};
use super::discover::discover_hubs;
use super::fetch::{LegFetcher, OfferSource};
use super::rank::rank_round_trips;

/// What a search run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Ranked round trips, cheapest first, truncated to the result cap.
    Trips(Vec<RoundTrip>),

    /// The hub set was empty; no legs were fetched.
    NoHubs,

    /// One or both directions had no feasible journey.
    NoJourneys {
        /// Feasible outbound journeys found
        outbound: usize,
        /// Feasible inbound journeys found
        inbound: usize,
    },

    /// Journeys existed but no round trip could be assembled.
    NoRoundTrips,
}

/// Search for round trips per the query and configuration.
///
/// Provider failures never surface here: each is recovered at its call
/// site and shows up only as missing offers.
pub async fn search_round_trips<S: OfferSource>(
    source: &S,
    query: &TripQuery,
    config: &EngineConfig,
) -> SearchOutcome {
    let hubs = resolve_hubs(source, query, config).await;
    if hubs.is_empty() {
        info!("no connecting hubs available, ending search");
        return SearchOutcome::NoHubs;
    }
    info!(hubs = hubs.len(), "searching legs through candidate hubs");

    let fetcher = LegFetcher::new(source, query, config);
    let (outbound_legs, inbound_legs) = join!(
        fetcher.direction(
            query.origin,
            query.destination,
            query.departure_date,
            &hubs,
            config.connection_plan,
        ),
        fetcher.direction(
            query.destination,
            query.origin,
            query.return_date,
            &hubs,
            config.connection_plan,
        ),
    );

    let combine = match config.connection_plan {
        ConnectionPlan::OneStop => combine_one_stop,
        ConnectionPlan::TwoStop => combine_two_stop,
    };
    let outbound = combine(
        query.origin,
        query.destination,
        &outbound_legs,
        config.min_connection(),
    );
    let inbound = combine(
        query.destination,
        query.origin,
        &inbound_legs,
        config.min_connection(),
    );
    info!(
        outbound = outbound.len(),
        inbound = inbound.len(),
        "combined feasible journeys"
    );

    if outbound.is_empty() || inbound.is_empty() {
        return SearchOutcome::NoJourneys {
            outbound: outbound.len(),
            inbound: inbound.len(),
        };
    }

    let trips = assemble_round_trips(&outbound, &inbound);
    if trips.is_empty() {
        return SearchOutcome::NoRoundTrips;
    }

    SearchOutcome::Trips(rank_round_trips(trips, config.max_results))
}

/// Resolve the candidate hub set per the configured source.
async fn resolve_hubs<S: OfferSource>(
    source: &S,
    query: &TripQuery,
    config: &EngineConfig,
) -> HubSet {
    match &config.hub_source {
        HubSource::Static(hubs) => hubs.iter().copied().collect(),
        HubSource::Discovered => discovered(source, query, config).await,
        HubSource::DiscoveredPlusStatic(hubs) => {
            let mut all = discovered(source, query, config).await;
            all.extend(hubs.iter().copied());
            all
        }
    }
}

/// Discover hubs in both directions of travel and union the results.
async fn discovered<S: OfferSource>(
    source: &S,
    query: &TripQuery,
    config: &EngineConfig,
) -> HubSet {
    let (mut outbound, inbound) = join!(
        discover_hubs(
            source,
            query.origin,
            query.destination,
            query.departure_date,
            query.currency,
            config.discovery_offer_cap,
        ),
        discover_hubs(
            source,
            query.destination,
            query.origin,
            query.return_date,
            query.currency,
            config.discovery_offer_cap,
        ),
    );
    outbound.extend(inbound);
    outbound
}
