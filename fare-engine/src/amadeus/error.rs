//! Amadeus client error types.

use super::convert::ConversionError;

/// Errors from the Amadeus HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum AmadeusError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by the Amadeus API")]
    RateLimited,

    /// Invalid or rejected credentials
    #[error("unauthorized (invalid API credentials)")]
    Unauthorized,

    /// A response offer could not be converted to domain types
    #[error("conversion error: {0}")]
    Convert(#[from] ConversionError),
}
