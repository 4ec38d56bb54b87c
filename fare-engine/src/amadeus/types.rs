//! Wire types for the Amadeus Flight Offers Search API.
//!
//! These mirror the JSON shapes the API returns; only the fields the
//! engine consumes are modelled. Conversion to validated domain types
//! happens in `convert`.

use serde::Deserialize;

/// Response from the OAuth2 token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Top-level flight offers search response.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffersResponse {
    /// The offers; may be absent or empty
    #[serde(default)]
    pub data: Vec<FlightOfferDto>,
}

/// One priced offer.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOfferDto {
    #[serde(default)]
    pub itineraries: Vec<ItineraryDto>,
    pub price: PriceDto,
}

/// One direction of travel within an offer.
#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryDto {
    #[serde(default)]
    pub segments: Vec<SegmentDto>,
}

/// One flown segment.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentDto {
    pub departure: EndpointDto,
    pub arrival: EndpointDto,
}

/// An airport plus a local timestamp.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDto {
    pub iata_code: String,
    pub at: String,
}

/// Offer price block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    /// Currency of the totals; absent in some responses
    #[serde(default)]
    pub currency: Option<String>,
    pub grand_total: String,
}
