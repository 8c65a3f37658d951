//! # Event Handler
//!
//! Applies completion events from background tasks to the application
//! state, one write lock per event.
//!
//! All events pass the same gate first: the epoch stamped into the event
//! must match the current session epoch and a session must exist. Anything
//! else is a straggler from a session that already ended and is discarded
//! without touching state.

use crate::app::state::TaskState;
use crate::app::{App, AppEvent};
use crate::core::error::Result;
use crate::services::api::{PriceSnapshot, SentimentReport};
use crate::app::state::WhaleTransfer;
use chrono::Utc;

/// Fallback assistant line appended when the reply call fails. The
/// transcript always shows what the user saw, failures included.
pub const CHAT_FALLBACK: &str = "Bağlantı koptu. Sinyal kayboldu, tekrar dene.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::PricesRefreshed { epoch, result } => {
                if self.accepts_epoch(epoch) {
                    self.handle_prices_refreshed(result);
                }
            }
            AppEvent::SentimentResult { epoch, result } => {
                if self.accepts_epoch(epoch) {
                    self.handle_sentiment_result(result);
                }
            }
            AppEvent::WhaleScanResult { epoch, result } => {
                if self.accepts_epoch(epoch) {
                    self.handle_whale_scan_result(result);
                }
            }
            AppEvent::WhaleExplainResult { epoch, transfer_id, result } => {
                if self.accepts_epoch(epoch) {
                    self.handle_whale_explain_result(transfer_id, result);
                }
            }
            AppEvent::ChatReply { epoch, result } => {
                if self.accepts_epoch(epoch) {
                    self.handle_chat_reply(result);
                }
            }
        }
    }
}

impl App {
    /// Stale-completion gate. A completion is applied only when a session
    /// exists and its epoch is the one the task was spawned under.
    fn accepts_epoch(&self, epoch: u64) -> bool {
        let state = self.state.read();
        let current = state.session_epoch;
        let live = state.session.is_some() && epoch == current;
        if !live {
            tracing::debug!(
                event_epoch = epoch,
                current_epoch = current,
                authenticated = state.session.is_some(),
                "Discarding stale completion"
            );
        }
        live
    }

    /// Apply one refresh outcome as a single atomic snapshot.
    ///
    /// Per-asset merge: an asset present in the snapshot with a price gets
    /// new values; an asset the response skipped keeps its previous ones
    /// (zero if it was never fetched). A failed cycle changes nothing.
    fn handle_prices_refreshed(&mut self, result: Result<PriceSnapshot>) {
        let mut state = self.state.write();
        state.market.refresh_in_flight = false;

        match result {
            Ok(snapshot) => {
                let mut updated = 0usize;
                for asset in state.market.assets.iter_mut() {
                    if let Some(quote) = snapshot.get(&asset.id) {
                        if let Some(usd) = quote.usd {
                            asset.price = usd;
                            asset.change_24h = quote.usd_24h_change.or(asset.change_24h);
                            updated += 1;
                        }
                    }
                }
                state.market.last_refresh = Some(Utc::now());
                tracing::debug!(
                    updated = updated,
                    tracked = state.market.assets.len(),
                    "Price snapshot applied"
                );
            }
            Err(e) => {
                // Silent degrade: stale values stay on screen
                tracing::warn!(error = %e, "Price refresh cycle failed");
            }
        }
    }

    fn handle_sentiment_result(&mut self, result: Result<SentimentReport>) {
        tracing::info!(event = "SentimentResult", success = result.is_ok(), "Processing sentiment result");
        let mut state = self.state.write();
        state.sentiment.task = match result {
            Ok(report) => TaskState::Succeeded(report),
            Err(e) => TaskState::Failed(e),
        };
    }

    fn handle_whale_scan_result(&mut self, result: Result<Vec<WhaleTransfer>>) {
        tracing::info!(event = "WhaleScanResult", success = result.is_ok(), "Processing whale scan result");
        let mut state = self.state.write();
        state.whale.scan = match result {
            Ok(transfers) => TaskState::Succeeded(transfers),
            Err(e) => TaskState::Failed(e),
        };
    }

    fn handle_whale_explain_result(&mut self, transfer_id: String, result: Result<String>) {
        let mut state = self.state.write();
        // A narrative for a transfer the panel no longer points at is
        // superseded, same as a stale epoch
        if state.whale.explain_target.as_deref() != Some(transfer_id.as_str()) {
            tracing::debug!(transfer_id = %transfer_id, "Discarding superseded transfer narrative");
            return;
        }
        state.whale.explain = match result {
            Ok(text) => TaskState::Succeeded(text),
            Err(e) => TaskState::Failed(e),
        };
    }

    /// Settle a chat reply. Both outcomes append an assistant message and
    /// return the task to idle so the next send can go out immediately.
    fn handle_chat_reply(&mut self, result: Result<String>) {
        let mut state = self.state.write();
        let text = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Chat reply failed - appending fallback line");
                CHAT_FALLBACK.to_string()
            }
        };
        state.chat.transcript.push(crate::app::state::ChatMessage {
            role: crate::app::state::ChatRole::Assistant,
            text,
            sent_at: Utc::now(),
        });
        state.chat.task = TaskState::Idle;
    }
}
