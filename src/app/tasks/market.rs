//! # Market Data Tasks
//!
//! Price refresh and the per-session polling loop.
//!
//! A refresh is one batched lookup for every tracked asset. The
//! `refresh_in_flight` flag prevents task pileup when a cycle is slow; the
//! completion is delivered as [`AppEvent::PricesRefreshed`] stamped with the
//! epoch of the session that asked for it, so the event handler can drop
//! results that arrive after a logout.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::spawn;

/// Production polling cadence. Tests pass their own interval instead.
pub const PRICE_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Refresh the price cache once.
///
/// Skips with a debug log when a refresh is already in flight. The fetch
/// runs on a spawned task; the cache itself is only touched by the event
/// handler when the completion arrives.
pub(crate) fn refresh_prices(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    // Check the in-flight flag and grab everything the task needs under
    // one short write lock
    let (ids, api, epoch) = {
        let mut state = state.write();

        // The poller can race a logout; a refresh for a dead session would
        // leave the in-flight flag set with nothing left to clear it
        if state.session.is_none() {
            tracing::debug!("Skipping price refresh - no active session");
            return;
        }
        if state.market.refresh_in_flight {
            tracing::debug!("Skipping price refresh - previous cycle still in flight");
            return;
        }
        let api = match state.market_api.clone() {
            Some(api) => api,
            None => {
                tracing::warn!("No market data service configured - skipping refresh");
                return;
            }
        };
        state.market.refresh_in_flight = true;

        let ids: Vec<String> = state.market.assets.iter().map(|a| a.id.clone()).collect();
        (ids, api, state.session_epoch)
    };

    spawn(async move {
        let result = api.fetch_prices(&ids).await;
        if let Err(ref e) = result {
            tracing::warn!(error = %e, "Price refresh failed - keeping last known prices");
        }
        let _ = event_tx.send(AppEvent::PricesRefreshed { epoch, result }).await;
    });
}

/// Run the periodic refresh loop for the current session.
///
/// Captures the epoch at spawn time and exits as soon as the epoch moves or
/// the session disappears, so no cycle runs after logout. The immediate
/// post-login refresh is the login handler's job; this loop only covers the
/// steady-state cadence.
pub(crate) fn spawn_price_poller(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    interval: Duration,
) {
    let epoch = state.read().session_epoch;
    tracing::info!(epoch = epoch, interval_secs = interval.as_secs_f64(), "Price poller started");

    spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            let session_alive = {
                let state = state.read();
                state.session.is_some() && state.session_epoch == epoch
            };
            if !session_alive {
                tracing::info!(epoch = epoch, "Price poller stopping - session ended");
                break;
            }

            refresh_prices(state.clone(), event_tx.clone());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{test_state, StubMarket};
    use crate::app::state::SessionUser;

    fn logged_in(state: &Arc<RwLock<AppState>>) {
        state.write().session = Some(SessionUser {
            username: "must3y".into(),
            role: "Elite Member".into(),
        });
    }

    #[tokio::test]
    async fn refresh_skipped_while_in_flight() {
        let market = Arc::new(StubMarket::with_prices(&[("bitcoin", 64_250.0, 3.1)]));
        let (state, tx, rx) = test_state(market.clone(), None);
        logged_in(&state);
        state.write().market.refresh_in_flight = true;

        refresh_prices(state.clone(), tx);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(market.calls(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn refresh_emits_epoch_stamped_completion() {
        let market = Arc::new(StubMarket::with_prices(&[("bitcoin", 64_250.0, 3.1)]));
        let (state, tx, rx) = test_state(market.clone(), None);
        logged_in(&state);

        refresh_prices(state.clone(), tx);
        let event = rx.recv().await.unwrap();

        assert_eq!(market.calls(), 1);
        match event {
            AppEvent::PricesRefreshed { epoch, result } => {
                assert_eq!(epoch, 0);
                assert!(result.is_ok());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn poller_stops_after_logout() {
        let market = Arc::new(StubMarket::with_prices(&[("bitcoin", 64_250.0, 3.1)]));
        let (state, tx, _rx) = test_state(market.clone(), None);
        logged_in(&state);

        spawn_price_poller(state.clone(), tx, Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(35)).await;
        let calls_before_logout = market.calls();
        assert!(calls_before_logout >= 1, "poller never fired");

        state.write().reset_session();
        tokio::time::sleep(Duration::from_millis(50)).await;
        // One cycle may have been in flight at logout; after that, silence.
        let calls_after = market.calls();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(market.calls(), calls_after);
    }
}
