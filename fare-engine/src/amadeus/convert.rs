//! Conversion from Amadeus DTOs to domain types.
//!
//! Raw API responses become validated `Offer` values here. Individual
//! malformed offers are skipped with a warning rather than failing the
//! whole response.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::{CurrencyCode, FlightSegment, IataCode, Itinerary, Money, Offer};

use super::types::{FlightOfferDto, FlightOffersResponse, SegmentDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse an airport code
    #[error("invalid airport code: {0}")]
    InvalidAirport(String),

    /// Failed to parse a timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Failed to parse a price
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Failed to parse a currency code
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// Offer or itinerary had no content
    #[error("empty offer structure: {0}")]
    Empty(&'static str),
}

/// Convert a flight offers response to domain offers.
///
/// `run_currency` is the currency the search requested; it is used when
/// the response omits one. Offers that fail conversion are skipped.
pub fn convert_offers(
    response: &FlightOffersResponse,
    run_currency: CurrencyCode,
) -> Vec<Offer> {
    let mut offers = Vec::with_capacity(response.data.len());

    for dto in &response.data {
        match convert_offer(dto, run_currency) {
            Ok(offer) => offers.push(offer),
            Err(e) => {
                warn!(error = %e, "skipping unconvertible offer");
            }
        }
    }

    offers
}

/// Convert a single offer DTO.
pub fn convert_offer(
    dto: &FlightOfferDto,
    run_currency: CurrencyCode,
) -> Result<Offer, ConversionError> {
    if dto.itineraries.is_empty() {
        return Err(ConversionError::Empty("offer has no itineraries"));
    }

    let mut itineraries = Vec::with_capacity(dto.itineraries.len());
    for itinerary in &dto.itineraries {
        if itinerary.segments.is_empty() {
            return Err(ConversionError::Empty("itinerary has no segments"));
        }
        let segments = itinerary
            .segments
            .iter()
            .map(convert_segment)
            .collect::<Result<Vec<_>, _>>()?;
        itineraries.push(
            Itinerary::new(segments).map_err(|_| ConversionError::Empty("itinerary"))?,
        );
    }

    let amount: Decimal = dto
        .price
        .grand_total
        .parse()
        .map_err(|_| ConversionError::InvalidPrice(dto.price.grand_total.clone()))?;

    let currency = match &dto.price.currency {
        Some(code) => CurrencyCode::parse(code)
            .map_err(|_| ConversionError::InvalidCurrency(code.clone()))?,
        None => run_currency,
    };

    Offer::new(itineraries, Money::new(amount, currency))
        .map_err(|_| ConversionError::Empty("offer"))
}

fn convert_segment(dto: &SegmentDto) -> Result<FlightSegment, ConversionError> {
    Ok(FlightSegment {
        origin: parse_airport(&dto.departure.iata_code)?,
        departs_at: parse_instant(&dto.departure.at)?,
        destination: parse_airport(&dto.arrival.iata_code)?,
        arrives_at: parse_instant(&dto.arrival.at)?,
    })
}

fn parse_airport(code: &str) -> Result<IataCode, ConversionError> {
    IataCode::parse(code).map_err(|_| ConversionError::InvalidAirport(code.to_string()))
}

/// Parse a provider timestamp.
///
/// The API emits local times without a UTC offset ("2025-10-31T06:15:00");
/// those are anchored at UTC so instants stay comparable across the
/// whole run. Timestamps carrying an explicit offset are honoured.
fn parse_instant(s: &str) -> Result<DateTime<FixedOffset>, ConversionError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(instant);
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|_| ConversionError::InvalidTimestamp(s.to_string()))
}
