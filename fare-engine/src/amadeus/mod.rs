//! Amadeus flight offers provider.
//!
//! HTTP client, wire types, and conversion to domain offers. The
//! client implements the engine's `OfferSource` seam, so everything
//! above this module is provider-agnostic.

mod client;
mod convert;
mod error;
mod types;

pub use client::{AmadeusClient, AmadeusConfig};
pub use convert::{ConversionError, convert_offer, convert_offers};
pub use error::AmadeusError;
pub use types::{
    EndpointDto, FlightOfferDto, FlightOffersResponse, ItineraryDto, PriceDto, SegmentDto,
    TokenResponse,
};
