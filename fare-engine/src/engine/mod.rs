//! The itinerary combination engine.
//!
//! Answers: "what round trips exist through connecting hubs that the
//! provider never offers as a single product?" Hub discovery, leg
//! fetching, journey combination under the connection-time rule,
//! round-trip assembly, and price ranking.

mod combine;
mod config;
mod discover;
mod fetch;
mod pipeline;
mod rank;

pub use combine::{
    assemble_round_trips, combine_one_stop, combine_two_stop, feasible_connection,
};
pub use config::{ConnectionPlan, EngineConfig, HubSource, TripQuery};
pub use discover::discover_hubs;
pub use fetch::{DirectionLegs, HubOffers, HubPairOffers, LegFetcher, OfferQuery, OfferSource, SourceError};
pub use pipeline::{SearchOutcome, search_round_trips};
pub use rank::rank_round_trips;
