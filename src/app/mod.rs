//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI layer, the spawned async
//! tasks, and the shared application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Main Thread (egui)                     │
//! │  App                                                     │
//! │   - on_tick()            drains completion events        │
//! │   - handle_*()           user action handlers            │
//! │  State: Arc<RwLock<AppState>>  (locks held briefly)      │
//! └───────────────────────┬──────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼──────────────────────────────────┐
//! │               Async Tasks (Tokio)                        │
//! │   tasks::market      price refresh + poller              │
//! │   tasks::sentiment   structured AI analysis              │
//! │   tasks::whale       radar scan + transfer narrative     │
//! │   handlers::chat     assistant reply                     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every completion event carries the session epoch it was spawned under;
//! [`event_handler`] discards anything stamped with a stale epoch. That
//! single rule is what makes logout safe while calls are in flight.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use must3y::app::App;
//!
//! let mut app = App::new();
//!
//! // In the egui update loop:
//! app.on_tick();                  // apply async completions
//! app.handle_login_click();       // user actions
//! let state = app.state.read();   // render from a short read lock
//! drop(state);
//! ```

pub mod state;
pub mod events;
pub mod handlers;
pub mod tasks;
mod event_handler;
#[cfg(test)]
pub mod test_support;

pub use events::AppEvent;
pub use state::{AppState, Tab, TaskState};

use crate::core::service::{IntelService, MarketDataService};
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Main application orchestrator.
///
/// Owns the shared state and the completion-event channel. UI code calls
/// the `handle_*` methods; spawned tasks answer through [`AppEvent`]s that
/// [`App::on_tick`] applies on the main thread.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Read for rendering, written by handlers and the event handler.
    /// Locks are held for minimal duration to keep the UI responsive.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, drained in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    /// Cadence of the per-session price poller. Production uses
    /// [`tasks::market::PRICE_POLL_INTERVAL`]; tests shrink it to
    /// milliseconds.
    poll_interval: Duration,
}

impl App {
    /// Create the production application: live CoinGecko market data and
    /// the Gemini-backed intel service, 60 s price polling.
    pub fn new() -> Self {
        let api = Arc::new(crate::services::api::ApiClient::new());
        let mut app = Self::with_services(api.clone(), api);
        app.poll_interval = tasks::market::PRICE_POLL_INTERVAL;
        tracing::info!("App state initialized - event channel created");
        app
    }

    /// Create an application with injected services.
    ///
    /// This is the dependency-injection seam the tests use; it is also how
    /// a real whale feed would replace the built-in simulation.
    pub fn with_services(
        market: Arc<dyn MarketDataService>,
        intel: Arc<dyn IntelService>,
    ) -> Self {
        let state = AppState {
            market_api: Some(market),
            intel_api: Some(intel),
            ..AppState::default()
        };
        let (event_tx, event_rx) = unbounded();

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            poll_interval: Duration::from_millis(20),
        }
    }

    /// Called every frame to apply pending async completions.
    ///
    /// Non-blocking: drains whatever `try_recv` yields and returns. Each
    /// event takes one short write lock.
    pub fn on_tick(&mut self) {
        use event_handler::AppEventHandler;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_impl(event);
        }
    }

    /// Get the event sender for spawning tasks outside the handlers.
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle login button click. Reads the credentials from the login
    /// form fields on state.
    pub fn handle_login_click(&mut self) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.poll_interval,
        );
    }

    /// Handle logout: epoch bump plus full session-state reset.
    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout(self.state.clone());
    }

    /// Switch the active tab (requires an active session).
    pub fn select_tab(&mut self, tab: Tab) -> crate::core::error::Result<()> {
        handlers::navigation::select_tab(self.state.clone(), tab)
    }

    /// Switch the active tab by its stable name.
    pub fn select_tab_by_name(&mut self, name: &str) -> crate::core::error::Result<()> {
        handlers::navigation::select_tab_by_name(self.state.clone(), name)
    }

    /// Toggle the chat overlay.
    pub fn handle_chat_toggle(&mut self) {
        handlers::chat::toggle_chat(self.state.clone());
    }

    /// Send the chat input field's text to the assistant.
    pub fn handle_chat_send(&mut self) {
        handlers::chat::handle_chat_send(self.state.clone(), self.event_tx.clone());
    }

    /// Run a sentiment analysis for the query input field's text.
    pub fn handle_sentiment_query(&mut self) {
        tasks::sentiment::run_sentiment_query(self.state.clone(), self.event_tx.clone());
    }

    /// Start a whale radar scan.
    pub fn handle_whale_scan(&mut self) {
        tasks::whale::run_whale_scan(self.state.clone(), self.event_tx.clone());
    }

    /// Ask for an AI narrative on one transfer in the active feed.
    pub fn handle_transfer_explain(&mut self, transfer_id: &str) {
        tasks::whale::run_transfer_explain(
            self.state.clone(),
            self.event_tx.clone(),
            transfer_id.to_string(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
