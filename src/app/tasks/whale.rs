//! # Whale Radar Tasks
//!
//! The radar scan and the per-transfer AI narrative.
//!
//! Both go through [`crate::core::service::IntelService`], so the built-in
//! simulated feed and a real external feed are interchangeable without
//! touching this module.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, TaskState};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Start a radar scan.
///
/// Once the scan succeeds the feed is active and stays active until the
/// session ends; a re-scan simply replaces the feed.
pub(crate) fn run_whale_scan(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api, epoch) = {
        let mut state = state.write();

        if state.session.is_none() {
            tracing::debug!("Ignoring whale scan - no active session");
            return;
        }
        if state.whale.scan.is_pending() {
            tracing::debug!("Ignoring whale scan - scan already pending");
            return;
        }
        let api = match state.intel_api.clone() {
            Some(api) => api,
            None => {
                tracing::warn!("No intel service configured - skipping whale scan");
                return;
            }
        };
        state.whale.scan = TaskState::Pending;
        (api, state.session_epoch)
    };

    spawn(async move {
        tracing::info!("Whale radar scan started");
        let result = api.scan_whale_transfers().await;
        let _ = event_tx.send(AppEvent::WhaleScanResult { epoch, result }).await;
    });
}

/// Ask the AI for a short narrative on one transfer.
pub(crate) fn run_transfer_explain(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    transfer_id: String,
) {
    let (transfer, api, epoch) = {
        let mut state = state.write();

        if state.session.is_none() {
            tracing::debug!("Ignoring transfer explain - no active session");
            return;
        }
        if state.whale.explain.is_pending() {
            tracing::debug!("Ignoring transfer explain - narrative already pending");
            return;
        }
        let transfer = match &state.whale.scan {
            TaskState::Succeeded(transfers) => {
                transfers.iter().find(|t| t.id == transfer_id).cloned()
            }
            _ => None,
        };
        let transfer = match transfer {
            Some(t) => t,
            None => {
                tracing::warn!(transfer_id = %transfer_id, "Transfer not in the active feed - skipping explain");
                return;
            }
        };
        let api = match state.intel_api.clone() {
            Some(api) => api,
            None => {
                tracing::warn!("No intel service configured - skipping transfer explain");
                return;
            }
        };
        state.whale.explain = TaskState::Pending;
        state.whale.explain_target = Some(transfer_id.clone());
        (transfer, api, state.session_epoch)
    };

    spawn(async move {
        tracing::info!(transfer_id = %transfer.id, symbol = %transfer.asset_symbol, "Requesting transfer narrative");
        let result = api.explain_transfer(&transfer).await;
        let _ = event_tx
            .send(AppEvent::WhaleExplainResult { epoch, transfer_id, result })
            .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event_handler::AppEventHandler;
    use crate::app::test_support::{test_app, StubIntel, StubMarket};
    use crate::app::state::SessionUser;
    use std::time::Duration;

    #[tokio::test]
    async fn scan_without_session_is_ignored() {
        let intel = Arc::new(StubIntel::default());
        let app = test_app(Arc::new(StubMarket::empty()), intel.clone());

        run_whale_scan(app.state.clone(), app.event_tx());
        run_transfer_explain(app.state.clone(), app.event_tx(), "w1".into());
        tokio::time::sleep(Duration::from_millis(20)).await;

        let state = app.state.read();
        assert!(state.whale.scan.is_idle());
        assert!(state.whale.explain.is_idle());
        assert_eq!(intel.scan_calls(), 0);
        assert_eq!(intel.explain_calls(), 0);
    }

    #[tokio::test]
    async fn scan_goes_pending_then_active() {
        let intel = Arc::new(StubIntel::default().with_delay(Duration::from_millis(50)));
        let mut app = test_app(Arc::new(StubMarket::empty()), intel.clone());
        app.state.write().session = Some(SessionUser {
            username: "must3y".into(),
            role: "Elite Member".into(),
        });

        run_whale_scan(app.state.clone(), app.event_tx());
        assert!(app.state.read().whale.scan.is_pending());

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event_impl(event);

        let state = app.state.read();
        match &state.whale.scan {
            TaskState::Succeeded(transfers) => {
                assert_eq!(transfers.len(), 3);
                assert_eq!(transfers[0].asset_symbol, "BTC");
            }
            other => panic!("feed not active: {:?}", other),
        }
    }

    #[tokio::test]
    async fn explain_requires_active_feed() {
        let intel = Arc::new(StubIntel::default());
        let mut app = test_app(Arc::new(StubMarket::empty()), intel.clone());
        app.state.write().session = Some(SessionUser {
            username: "must3y".into(),
            role: "Elite Member".into(),
        });

        // No scan yet: nothing to explain
        run_transfer_explain(app.state.clone(), app.event_tx(), "w1".into());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(app.state.read().whale.explain.is_idle());
        assert_eq!(intel.explain_calls(), 0);

        // Scan, then explain a transfer the feed contains
        run_whale_scan(app.state.clone(), app.event_tx());
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event_impl(event);

        run_transfer_explain(app.state.clone(), app.event_tx(), "w1".into());
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event_impl(event);

        let state = app.state.read();
        assert_eq!(state.whale.explain_target.as_deref(), Some("w1"));
        assert!(matches!(state.whale.explain, TaskState::Succeeded(_)));
        assert_eq!(intel.explain_calls(), 1);
    }
}
