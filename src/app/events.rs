//! # Application Events
//!
//! Completion events sent from spawned tasks back to the main thread.
//!
//! Every variant carries the session epoch captured when its task was
//! spawned. The event handler compares it against the current epoch and
//! discards stale completions, which is what keeps a logout from being
//! mutated by work that was still in flight when the session ended.

use crate::core::error::Result;
use crate::services::api::{PriceSnapshot, SentimentReport};
use crate::app::state::WhaleTransfer;

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A price refresh cycle finished
    PricesRefreshed {
        epoch: u64,
        result: Result<PriceSnapshot>,
    },
    /// Sentiment analysis finished
    SentimentResult {
        epoch: u64,
        result: Result<SentimentReport>,
    },
    /// Whale radar scan finished
    WhaleScanResult {
        epoch: u64,
        result: Result<Vec<WhaleTransfer>>,
    },
    /// Transfer narrative finished
    WhaleExplainResult {
        epoch: u64,
        transfer_id: String,
        result: Result<String>,
    },
    /// Assistant reply for the chat overlay
    ChatReply {
        epoch: u64,
        result: Result<String>,
    },
}
