//! # API Client
//!
//! Shared HTTP client wired into the [`crate::core::service`] traits.

use crate::app::state::{ChatMessage, WhaleTransfer};
use crate::core::error::Result;
use crate::core::service::{IntelService, MarketDataService};
use reqwest::Client;

/// HTTP client for the upstream services.
///
/// One `reqwest::Client` serves both CoinGecko and Gemini; it maintains a
/// connection pool, so the struct should be created once and shared via
/// `Arc`.
pub struct ApiClient {
    pub(crate) http: Client,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new() -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MarketDataService for ApiClient {
    async fn fetch_prices(&self, ids: &[String]) -> Result<crate::services::api::market::PriceSnapshot> {
        crate::services::api::market::fetch_simple_price(self, ids).await
    }
}

#[async_trait::async_trait]
impl IntelService for ApiClient {
    async fn analyze_sentiment(
        &self,
        asset: &str,
        headlines: &[&str],
    ) -> Result<crate::services::api::intel::SentimentReport> {
        crate::services::api::intel::analyze_sentiment(self, asset, headlines).await
    }

    async fn chat_reply(&self, transcript: &[ChatMessage]) -> Result<String> {
        crate::services::api::intel::chat_reply(self, transcript).await
    }

    async fn explain_transfer(&self, transfer: &WhaleTransfer) -> Result<String> {
        crate::services::api::intel::explain_transfer(self, transfer).await
    }

    async fn scan_whale_transfers(&self) -> Result<Vec<WhaleTransfer>> {
        crate::services::api::intel::scan_whale_transfers().await
    }
}
