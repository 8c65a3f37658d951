//! # Authentication Handlers
//!
//! Login and logout. The credential check itself is synchronous (the
//! registry is in memory); what login kicks off afterwards - the first
//! price refresh and the polling loop - is spawned.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Tab};
use crate::app::tasks;
use crate::services::auth;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Fixed rejection line shown on any failed attempt. Never hints at
/// which field was wrong.
pub const LOGIN_REJECTED: &str = "Erişim Reddedildi.";

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    poll_interval: Duration,
) {
    let (username, password) = {
        let state = state.read();
        (state.login.username.clone(), state.login.password.clone())
    };

    match auth::authenticate(&username, &password) {
        Ok(user) => {
            {
                let mut state = state.write();
                state.session = Some(user);
                state.active_tab = Tab::Dashboard;
                state.login = Default::default();
            }
            // First snapshot immediately, then the steady 60s cadence
            tasks::market::refresh_prices(state.clone(), event_tx.clone());
            tasks::market::spawn_price_poller(state, event_tx, poll_interval);
        }
        Err(_) => {
            // Form values are kept so the user can correct them
            let mut state = state.write();
            state.login.error = Some(LOGIN_REJECTED.to_string());
        }
    }
}

/// Handle logout button click
///
/// Internal handler function - use [`crate::app::App::handle_logout_click`] instead.
///
/// Bumping the epoch inside [`AppState::reset_session`] is what cancels the
/// poller and invalidates every in-flight completion; nothing is joined or
/// force-killed.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let username = state.session.as_ref().map(|u| u.username.clone());
    state.reset_session();
    tracing::info!(username = ?username, epoch = state.session_epoch, "Session ended");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{test_state, StubMarket};

    #[tokio::test]
    async fn successful_login_starts_session_and_refresh() {
        let market = Arc::new(StubMarket::with_prices(&[("bitcoin", 64_250.0, 3.1)]));
        let (state, tx, rx) = test_state(market.clone(), None);
        {
            let mut state = state.write();
            state.login.username = "must3y".into();
            state.login.password = "kral123".into();
        }

        handle_login_click(state.clone(), tx, Duration::from_secs(60));

        {
            let state = state.read();
            let user = state.session.as_ref().expect("no session");
            assert_eq!(user.role, "Elite Member");
            assert_eq!(state.active_tab, Tab::Dashboard);
            assert!(state.login.username.is_empty());
            assert!(state.login.error.is_none());
        }
        // The immediate refresh fired
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, AppEvent::PricesRefreshed { epoch: 0, .. }));
    }

    #[tokio::test]
    async fn failed_login_keeps_form_and_shows_fixed_line() {
        let (state, tx, rx) = test_state(Arc::new(StubMarket::empty()), None);
        {
            let mut state = state.write();
            state.login.username = "must3y".into();
            state.login.password = "wrong".into();
        }

        handle_login_click(state.clone(), tx, Duration::from_secs(60));

        let state = state.read();
        assert!(state.session.is_none());
        assert_eq!(state.login.error.as_deref(), Some(LOGIN_REJECTED));
        assert_eq!(state.login.username, "must3y");
        assert!(rx.try_recv().is_err());
    }
}
