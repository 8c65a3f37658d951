//! Stub services and fixtures shared by the app-layer tests.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, ChatMessage, WhaleTransfer};
use crate::app::App;
use crate::core::error::Result;
use crate::core::service::{IntelService, MarketDataService};
use crate::services::api::{AssetQuote, PriceSnapshot, SentimentLabel, SentimentReport};
use async_channel::{Receiver, Sender};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Market service returning a canned snapshot and counting calls.
pub struct StubMarket {
    snapshot: Result<PriceSnapshot>,
    calls: AtomicUsize,
}

impl StubMarket {
    /// Snapshot with the given (id, usd, change) triples.
    pub fn with_prices(prices: &[(&str, f64, f64)]) -> Self {
        let snapshot = prices
            .iter()
            .map(|(id, usd, change)| {
                (
                    id.to_string(),
                    AssetQuote {
                        usd: Some(*usd),
                        usd_24h_change: Some(*change),
                    },
                )
            })
            .collect::<HashMap<_, _>>();
        Self {
            snapshot: Ok(snapshot),
            calls: AtomicUsize::new(0),
        }
    }

    /// Successful but empty snapshot.
    pub fn empty() -> Self {
        Self::with_prices(&[])
    }

    pub fn failing(error: crate::core::error::AppError) -> Self {
        Self {
            snapshot: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataService for StubMarket {
    async fn fetch_prices(&self, _ids: &[String]) -> Result<PriceSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snapshot.clone()
    }
}

/// Intel service with canned answers, per-method call counters, and an
/// optional artificial delay so tests can observe the pending window.
pub struct StubIntel {
    pub sentiment: Result<SentimentReport>,
    pub reply: Result<String>,
    pub narrative: Result<String>,
    pub transfers: Result<Vec<WhaleTransfer>>,
    delay: Duration,
    sentiment_calls: AtomicUsize,
    chat_calls: AtomicUsize,
    explain_calls: AtomicUsize,
    scan_calls: AtomicUsize,
}

impl Default for StubIntel {
    fn default() -> Self {
        Self {
            sentiment: Ok(SentimentReport {
                score: 72,
                label: SentimentLabel::Positive,
                analysis: "Alım iştahı güçlü.".to_string(),
                note: "Test verisi.".to_string(),
            }),
            reply: Ok("Piyasa sakin, izlemeye devam.".to_string()),
            narrative: Ok("Borsadan soğuk cüzdana çıkış, arz kilitleniyor.".to_string()),
            transfers: Ok(crate::services::api::demo_whale_transfers()),
            delay: Duration::ZERO,
            sentiment_calls: AtomicUsize::new(0),
            chat_calls: AtomicUsize::new(0),
            explain_calls: AtomicUsize::new(0),
            scan_calls: AtomicUsize::new(0),
        }
    }
}

impl StubIntel {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_reply(mut self, reply: Result<String>) -> Self {
        self.reply = reply;
        self
    }

    pub fn sentiment_calls(&self) -> usize {
        self.sentiment_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn explain_calls(&self) -> usize {
        self.explain_calls.load(Ordering::SeqCst)
    }

    pub fn scan_calls(&self) -> usize {
        self.scan_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl IntelService for StubIntel {
    async fn analyze_sentiment(&self, _asset: &str, _headlines: &[&str]) -> Result<SentimentReport> {
        self.sentiment_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.sentiment.clone()
    }

    async fn chat_reply(&self, _transcript: &[ChatMessage]) -> Result<String> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.reply.clone()
    }

    async fn explain_transfer(&self, _transfer: &WhaleTransfer) -> Result<String> {
        self.explain_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.narrative.clone()
    }

    async fn scan_whale_transfers(&self) -> Result<Vec<WhaleTransfer>> {
        self.scan_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.transfers.clone()
    }
}

/// Fresh state wired to the given services, plus an event channel pair.
pub fn test_state(
    market: Arc<dyn MarketDataService>,
    intel: Option<Arc<dyn IntelService>>,
) -> (Arc<RwLock<AppState>>, Sender<AppEvent>, Receiver<AppEvent>) {
    let state = AppState {
        market_api: Some(market),
        intel_api: intel,
        ..AppState::default()
    };
    let (tx, rx) = async_channel::unbounded();
    (Arc::new(RwLock::new(state)), tx, rx)
}

/// Full [`App`] wired to stub services.
pub fn test_app(market: Arc<dyn MarketDataService>, intel: Arc<dyn IntelService>) -> App {
    App::with_services(market, intel)
}
