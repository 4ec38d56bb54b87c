//! Domain types for the fare engine.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod airport;
mod error;
mod money;
mod offer;
mod trip;

pub use airport::{HubSet, IataCode, InvalidIata};
pub use error::DomainError;
pub use money::{CurrencyCode, InvalidCurrency, Money};
pub use offer::{FlightSegment, Itinerary, Offer};
pub use trip::{Journey, RoundTrip};
