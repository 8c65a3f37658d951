//! # User Action Handlers
//!
//! Synchronous handlers for UI intents: login/logout, tab selection, and
//! the chat overlay. Anything long-running is spawned from here as a task.

pub mod auth;
pub mod chat;
pub mod navigation;
