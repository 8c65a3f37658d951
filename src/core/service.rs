//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The application state holds these as trait objects (`Arc<dyn ...>`), so
//! handlers and tasks never name a concrete client. Production wires in
//! [`crate::services::api::ApiClient`]; tests wire in mocks.

use crate::app::state::{ChatMessage, WhaleTransfer};
use crate::core::error::Result;
use crate::services::api::{PriceSnapshot, SentimentReport};
use async_trait::async_trait;

/// Trait for market data operations.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait MarketDataService: Send + Sync {
    /// Fetch current quotes for the given asset ids.
    ///
    /// A successful snapshot may still be partial: assets missing from the
    /// map (or missing a price) keep their previous cached values.
    async fn fetch_prices(&self, ids: &[String]) -> Result<PriceSnapshot>;
}

/// Trait for AI intelligence operations.
///
/// Covers everything answered by the generative endpoint plus the whale
/// transfer feed. The feed sits here deliberately: it is the seam where a
/// real external source would replace the built-in simulation.
#[async_trait]
pub trait IntelService: Send + Sync {
    /// Run a structured sentiment analysis for an asset or topic.
    async fn analyze_sentiment(&self, asset: &str, headlines: &[&str]) -> Result<SentimentReport>;

    /// Produce the next assistant reply for a chat transcript.
    ///
    /// The transcript is expected to end with the user turn being answered.
    async fn chat_reply(&self, transcript: &[ChatMessage]) -> Result<String>;

    /// Produce a short narrative explaining a whale transfer.
    async fn explain_transfer(&self, transfer: &WhaleTransfer) -> Result<String>;

    /// Scan for large transfers.
    async fn scan_whale_transfers(&self) -> Result<Vec<WhaleTransfer>>;
}
