//! # Market Data Endpoint
//!
//! CoinGecko simple-price queries for the tracked asset basket.

use crate::core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::client::ApiClient;

/// CoinGecko public API base URL
const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Fetch USD quotes with 24h change for the given asset ids.
///
/// The response is keyed by asset id and may be partial; callers merge it
/// into their cache per asset rather than replacing the whole set.
#[tracing::instrument(skip(client), fields(ids = ?ids))]
pub async fn fetch_simple_price(client: &ApiClient, ids: &[String]) -> Result<PriceSnapshot> {
    let start = std::time::Instant::now();
    let ids_param = ids.join(",");
    let url = format!(
        "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
        COINGECKO_BASE_URL, ids_param
    );

    tracing::debug!("Fetching prices");

    let response = client.http.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Price fetch network error");
        AppError::Fetch(format!("Network error: {}", e))
    })?;

    let duration = start.elapsed();

    if response.status().is_success() {
        let snapshot = response.json::<PriceSnapshot>().await.map_err(|e| {
            tracing::error!(error = %e, "Price response parse error");
            AppError::Fetch(format!("Failed to parse response: {}", e))
        })?;

        tracing::debug!(
            duration_ms = duration.as_millis(),
            quote_count = snapshot.len(),
            "Prices fetched successfully"
        );
        Ok(snapshot)
    } else {
        let status = response.status();
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Price fetch failed"
        );
        Err(AppError::Fetch(format!("Failed to fetch prices: {}", status)))
    }
}

// ==================== MARKET DATA TYPES ====================

/// One CoinGecko quote.
///
/// Both fields are optional: the endpoint omits them for assets it cannot
/// price, and the cache keeps its previous values in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetQuote {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
}

/// Simple-price response, keyed by asset id
pub type PriceSnapshot = HashMap<String, AssetQuote>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_simple_price_response() {
        let body = r#"{
            "bitcoin": {"usd": 64250.0, "usd_24h_change": 3.12},
            "ethereum": {"usd": 3100.5, "usd_24h_change": -1.48}
        }"#;
        let snapshot: PriceSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["bitcoin"].usd, Some(64250.0));
        assert_eq!(snapshot["ethereum"].usd_24h_change, Some(-1.48));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let body = r#"{"ripple": {}}"#;
        let snapshot: PriceSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot["ripple"].usd, None);
        assert_eq!(snapshot["ripple"].usd_24h_change, None);
    }
}
