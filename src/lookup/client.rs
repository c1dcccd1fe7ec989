//! Product lookup client
//!
//! Single fetch-and-decode against the product database API. No retries, no caching.

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Config;
use crate::models::{ProductEnvelope, ProductRecord};

/// Lookup error types
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid barcode: '{0}'")]
    InvalidBarcode(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from server: {0}")]
    InvalidResponse(StatusCode),

    #[error("Malformed product payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Product not found in database: {0}")]
    NotFound(String),
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// HTTP client for the product database
#[derive(Clone)]
pub struct ProductClient {
    http: Client,
    base_url: String,
}

impl ProductClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> LookupResult<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the product document for a barcode
    pub fn product_url(&self, barcode: &str) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), barcode)
    }

    /// Fetch and decode a product by barcode
    pub async fn fetch_product(&self, barcode: &str) -> LookupResult<ProductRecord> {
        let barcode = validate_barcode(barcode)?;
        let url = self.product_url(barcode);
        tracing::info!("Looking up product {}", barcode);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Lookup for {} returned HTTP {}", barcode, status);
            return Err(LookupError::InvalidResponse(status));
        }

        let body = response.text().await?;
        decode_product(barcode, &body)
    }
}

/// Trim and check that a barcode is a non-empty run of ASCII digits
pub fn validate_barcode(barcode: &str) -> LookupResult<&str> {
    let trimmed = barcode.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LookupError::InvalidBarcode(barcode.to_string()));
    }
    Ok(trimmed)
}

/// Decode a lookup response body into a product record
pub fn decode_product(barcode: &str, body: &str) -> LookupResult<ProductRecord> {
    let envelope: ProductEnvelope = serde_json::from_str(body)?;
    match envelope.product {
        Some(product) => Ok(product),
        None => {
            tracing::debug!(
                "No product for {} ({})",
                barcode,
                envelope.status_verbose.as_deref().unwrap_or("no status")
            );
            Err(LookupError::NotFound(barcode.to_string()))
        }
    }
}
