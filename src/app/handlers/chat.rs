//! # Chat Overlay Handlers
//!
//! Overlay visibility toggle and message send.
//!
//! Send is optimistic: the user's message lands in the transcript before
//! the AI call goes out, so the panel always reflects what the user typed
//! even when the reply later fails.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, ChatMessage, ChatRole, TaskState};
use async_channel::Sender;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Toggle the overlay. The transcript survives; only logout clears it.
pub(crate) fn toggle_chat(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.chat.open = !state.chat.open;
}

/// Send the message currently in the input field.
///
/// Blank input and a reply already in flight are both rejected without
/// touching the transcript; in the pending case the input is kept so the
/// user can retry once the reply lands.
pub(crate) fn handle_chat_send(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (transcript, api, epoch) = {
        let mut state = state.write();

        // The epoch only moves on logout, so a send accepted here while
        // logged out would pass the epoch gate after the next login
        if state.session.is_none() {
            tracing::debug!("Ignoring chat send - no active session");
            return;
        }
        let text = state.chat.input.trim().to_string();
        if text.is_empty() {
            tracing::debug!("Ignoring chat send - blank input");
            return;
        }
        if state.chat.task.is_pending() {
            tracing::debug!("Ignoring chat send - reply already pending");
            return;
        }
        let api = match state.intel_api.clone() {
            Some(api) => api,
            None => {
                tracing::warn!("No intel service configured - skipping chat send");
                return;
            }
        };

        state.chat.transcript.push(ChatMessage {
            role: ChatRole::User,
            text,
            sent_at: Utc::now(),
        });
        state.chat.input.clear();
        state.chat.task = TaskState::Pending;

        (state.chat.transcript.clone(), api, state.session_epoch)
    };

    spawn(async move {
        let result = api.chat_reply(&transcript).await;
        let _ = event_tx.send(AppEvent::ChatReply { epoch, result }).await;
    });
}
