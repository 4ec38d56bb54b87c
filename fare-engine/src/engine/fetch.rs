//! The leg-fetch boundary.
//!
//! Retrieves one-way offers per (airport-pair, date) from the external
//! provider and groups them by hub for the combiner. Every provider
//! call is independent: a failure yields an empty offer list for that
//! pair only, and nothing is cached across calls.

use std::collections::BTreeMap;
use std::future::Future;

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{CurrencyCode, HubSet, IataCode, Offer};

use super::config::{ConnectionPlan, EngineConfig, TripQuery};

/// One leg search: origin, destination, date, plus the run-wide
/// passenger count, currency, and result cap.
#[derive(Debug, Clone)]
pub struct OfferQuery {
    pub origin: IataCode,
    pub destination: IataCode,
    pub date: NaiveDate,
    pub passengers: u32,
    pub currency: CurrencyCode,
    pub limit: u32,
}

/// Error from an offer search, as seen by the engine.
///
/// The engine never propagates these; they are logged and the call is
/// treated as having found nothing.
#[derive(Debug, Clone, thiserror::Error)]
#[error("offer search failed: {0}")]
pub struct SourceError(String);

impl SourceError {
    /// Create a new source error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Trait for searching one-way flight offers.
///
/// This abstraction allows the engine to be tested with mock data.
pub trait OfferSource {
    /// Search for up to `query.limit` one-way offers.
    ///
    /// The returned list may be empty and is not assumed deduplicated
    /// or chronologically sorted.
    fn search(
        &self,
        query: &OfferQuery,
    ) -> impl Future<Output = Result<Vec<Offer>, SourceError>> + Send;
}

/// Offers grouped by connecting hub.
pub type HubOffers = BTreeMap<IataCode, Vec<Offer>>;

/// Offers for hub-to-hub legs, keyed by ordered hub pair.
pub type HubPairOffers = BTreeMap<(IataCode, IataCode), Vec<Offer>>;

/// All leg offers for one direction of travel.
///
/// `first` holds origin -> hub legs and `last` holds hub -> destination
/// legs. `middle` holds hub -> hub legs and is only populated for
/// two-stop searches.
#[derive(Debug, Clone, Default)]
pub struct DirectionLegs {
    pub first: HubOffers,
    pub middle: HubPairOffers,
    pub last: HubOffers,
}

/// Fetches leg offers through a set of hubs.
pub struct LegFetcher<'a, S: OfferSource> {
    source: &'a S,
    passengers: u32,
    currency: CurrencyCode,
    offers_per_leg: u32,
}

impl<'a, S: OfferSource> LegFetcher<'a, S> {
    /// Create a fetcher bound to one provider and one run's parameters.
    pub fn new(source: &'a S, query: &TripQuery, config: &EngineConfig) -> Self {
        Self {
            source,
            passengers: query.passengers,
            currency: query.currency,
            offers_per_leg: config.offers_per_leg,
        }
    }

    /// Fetch all leg groups for one direction of travel.
    ///
    /// The per-hub calls within each group are independent and issued
    /// concurrently; results land in ordered maps so downstream
    /// combination order is deterministic.
    pub async fn direction(
        &self,
        origin: IataCode,
        destination: IataCode,
        date: NaiveDate,
        hubs: &HubSet,
        plan: ConnectionPlan,
    ) -> DirectionLegs {
        let first = self.fan_out(hubs, |hub| (origin, hub), date).await;
        let last = self.fan_out(hubs, |hub| (hub, destination), date).await;

        let middle = match plan {
            ConnectionPlan::OneStop => HubPairOffers::new(),
            ConnectionPlan::TwoStop => self.hub_pairs(hubs, date).await,
        };

        DirectionLegs {
            first,
            middle,
            last,
        }
    }

    /// Fetch one leg group: one call per hub, concurrently.
    async fn fan_out(
        &self,
        hubs: &HubSet,
        route: impl Fn(IataCode) -> (IataCode, IataCode),
        date: NaiveDate,
    ) -> HubOffers {
        let searches = hubs.iter().map(|&hub| {
            let (origin, destination) = route(hub);
            async move { (hub, self.pair(origin, destination, date).await) }
        });

        join_all(searches).await.into_iter().collect()
    }

    /// Fetch hub-to-hub legs for every ordered pair of distinct hubs.
    async fn hub_pairs(&self, hubs: &HubSet, date: NaiveDate) -> HubPairOffers {
        let searches = hubs.iter().flat_map(|&from| {
            hubs.iter().filter(move |&&to| to != from).map(move |&to| {
                async move { ((from, to), self.pair(from, to, date).await) }
            })
        });

        join_all(searches).await.into_iter().collect()
    }

    /// One provider call for one (airport-pair, date).
    ///
    /// A provider error is recovered here: it yields an empty list for
    /// this pair only and never aborts the other fetches.
    async fn pair(&self, origin: IataCode, destination: IataCode, date: NaiveDate) -> Vec<Offer> {
        let query = OfferQuery {
            origin,
            destination,
            date,
            passengers: self.passengers,
            currency: self.currency,
            limit: self.offers_per_leg,
        };

        match self.source.search(&query).await {
            Ok(offers) => {
                debug!(%origin, %destination, %date, count = offers.len(), "leg search complete");
                offers
            }
            Err(e) => {
                warn!(%origin, %destination, %date, error = %e, "leg search failed, treating as no offers");
                Vec::new()
            }
        }
    }
}
