//! # MUST3Y Crypto Intelligence Terminal - Library Root
//!
//! A login-gated **native desktop GUI** for crypto market intelligence.
//! This library crate contains all modules used by the binary crate
//! (`main.rs`).
//!
//! ## Features
//!
//! - **Access Gate**: Fixed credential store, nothing renders until login
//! - **Live Market Data**: CoinGecko quotes polled per session
//! - **AI Intelligence**: Gemini-backed sentiment analysis, chat
//!   assistant, and whale transfer narratives
//! - **Whale Radar**: Large-transfer feed with per-transfer commentary
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │               must3y (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Native immediate-mode GUI             │
//! │  Tokio         - Async runtime for spawned tasks       │
//! │  Reqwest       - HTTP client (CoinGecko, Gemini)       │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │                          │
//!          │ HTTP                     │ HTTP
//!          ▼                          ▼
//! ┌─────────────────┐     ┌──────────────────────────┐
//! │  CoinGecko API  │     │  Gemini generateContent  │
//! │  (simple price) │     │  (chat, sentiment)       │
//! └─────────────────┘     └──────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, state, events, handlers, and spawned tasks
//! - **core**: Error type and the service traits behind the API surface
//! - **services**: CoinGecko/Gemini clients and the credential store
//! - **ui**: Theme, screens, widgets, and the eframe window
//! - **utils**: Display formatting helpers
//!
//! ## Session Model
//!
//! All user-visible state is session-scoped. Logout bumps a monotonic
//! session epoch and resets the state; async completions stamped with an
//! older epoch are discarded when they arrive. See [`app`] for details.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Tab};
pub use crate::core::error::{AppError, Result};
