//! Hub discovery.
//!
//! Infers candidate connecting airports from a direct-route search:
//! every intermediate stop the provider already routes through is a
//! plausible hub for independent leg searches. An alternative to a
//! hard-coded hub list.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::{CurrencyCode, HubSet, IataCode};

use super::fetch::{OfferQuery, OfferSource};

/// Discover hubs for one direction of travel.
///
/// Queries the provider for offers on the direct route and collects the
/// arrival airport of every non-final segment of every multi-segment
/// itinerary. Direct (single-segment) itineraries contribute nothing.
///
/// Provider errors are recovered here: they are logged and treated as
/// zero hubs discovered, never propagated.
pub async fn discover_hubs<S: OfferSource>(
    source: &S,
    origin: IataCode,
    destination: IataCode,
    date: NaiveDate,
    currency: CurrencyCode,
    offer_cap: u32,
) -> HubSet {
    let query = OfferQuery {
        origin,
        destination,
        date,
        passengers: 1,
        currency,
        limit: offer_cap,
    };

    let offers = match source.search(&query).await {
        Ok(offers) => offers,
        Err(e) => {
            warn!(%origin, %destination, %date, error = %e, "hub discovery failed, continuing with no hubs");
            return HubSet::new();
        }
    };

    let mut hubs = HubSet::new();
    for offer in &offers {
        for itinerary in offer.itineraries() {
            hubs.extend(itinerary.connection_points());
        }
    }

    debug!(%origin, %destination, count = hubs.len(), "hub discovery complete");
    hubs
}
