//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from API/IO errors.

use super::CurrencyCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// An itinerary must contain at least one segment
    #[error("itinerary must have at least one segment")]
    EmptyItinerary,

    /// An offer must contain at least one itinerary
    #[error("offer must have at least one itinerary")]
    EmptyOffer,

    /// Two prices in different currencies cannot be summed
    #[error("currency mismatch: {0} vs {1}")]
    CurrencyMismatch(CurrencyCode, CurrencyCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyItinerary;
        assert_eq!(err.to_string(), "itinerary must have at least one segment");

        let err = DomainError::EmptyOffer;
        assert_eq!(err.to_string(), "offer must have at least one itinerary");

        let usd = CurrencyCode::parse("USD").unwrap();
        let eur = CurrencyCode::parse("EUR").unwrap();
        let err = DomainError::CurrencyMismatch(usd, eur);
        assert_eq!(err.to_string(), "currency mismatch: USD vs EUR");
    }
}
