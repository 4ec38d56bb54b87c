//! Amadeus Flight Offers Search HTTP client.
//!
//! Provides async one-way offer searches against the Amadeus self-
//! service API. Handles OAuth2 client-credentials authentication,
//! bounded request concurrency, and conversion to domain types.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tokio::sync::{Mutex, Semaphore};
use tracing::debug;

use crate::domain::{CurrencyCode, IataCode, Offer};
use crate::engine::{OfferQuery, OfferSource, SourceError};

use super::convert::convert_offers;
use super::error::AmadeusError;
use super::types::{FlightOffersResponse, TokenResponse};

/// Default base URL (the Amadeus self-service test environment).
const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Refresh the cached token this long before it actually expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Configuration for the Amadeus client.
#[derive(Debug, Clone)]
pub struct AmadeusConfig {
    /// API key (client id)
    pub api_key: String,
    /// API secret
    pub api_secret: String,
    /// Base URL for the API (defaults to the test environment)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AmadeusConfig {
    /// Create a new config with the given credentials.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or the production host).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A bearer token with its refresh deadline.
#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    refresh_after: Instant,
}

/// Amadeus API client.
///
/// Uses a semaphore to limit concurrent requests and caches the OAuth2
/// token until shortly before expiry. Search results are never cached:
/// every call goes to the provider.
#[derive(Debug, Clone)]
pub struct AmadeusClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    semaphore: Arc<Semaphore>,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl AmadeusClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AmadeusConfig) -> Result<Self, AmadeusError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            api_secret: config.api_secret,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Get a valid bearer token, fetching a fresh one if needed.
    async fn access_token(&self) -> Result<String, AmadeusError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_after {
                return Ok(token.value.clone());
            }
        }

        let url = format!("{}/v1/security/oauth2/token", self.base_url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.api_key.as_str()),
                ("client_secret", self.api_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AmadeusError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AmadeusError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let lifetime = Duration::from_secs(token.expires_in);
        let refresh_after = Instant::now() + lifetime.saturating_sub(TOKEN_EXPIRY_MARGIN);
        debug!(expires_in = token.expires_in, "fetched new access token");

        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            refresh_after,
        });

        Ok(token.access_token)
    }

    /// Search for one-way flight offers.
    ///
    /// Issues one request per call. Returns up to `max_results` offers
    /// priced in `currency`; the returned list may be empty and is not
    /// deduplicated or sorted.
    pub async fn search_offers(
        &self,
        origin: IataCode,
        destination: IataCode,
        date: NaiveDate,
        passengers: u32,
        currency: CurrencyCode,
        max_results: u32,
    ) -> Result<Vec<Offer>, AmadeusError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| AmadeusError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let token = self.access_token().await?;

        let url = format!("{}/v2/shopping/flight-offers", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("originLocationCode", origin.as_str().to_string()),
                ("destinationLocationCode", destination.as_str().to_string()),
                ("departureDate", date.format("%Y-%m-%d").to_string()),
                ("adults", passengers.to_string()),
                ("currencyCode", currency.as_str().to_string()),
                ("max", max_results.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AmadeusError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AmadeusError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: FlightOffersResponse =
            serde_json::from_str(&body).map_err(|e| AmadeusError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(convert_offers(&parsed, currency))
    }
}

impl OfferSource for AmadeusClient {
    fn search(
        &self,
        query: &OfferQuery,
    ) -> impl Future<Output = Result<Vec<Offer>, SourceError>> + Send {
        let query = query.clone();
        async move {
            self.search_offers(
                query.origin,
                query.destination,
                query.date,
                query.passengers,
                query.currency,
                query.limit,
            )
            .await
            .map_err(|e| SourceError::new(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = AmadeusConfig::new("key", "secret")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_secret, "secret");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = AmadeusConfig::new("key", "secret");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let config = AmadeusConfig::new("key", "secret");
        assert!(AmadeusClient::new(config).is_ok());
    }

    // Integration tests against the live API require real credentials
    // and network access; they are deliberately not included here.
}
