//! # Sentiment Analysis Task
//!
//! Sends an asset or topic, together with a fixed sample of market
//! headlines, to the AI service for a structured sentiment verdict.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, TaskState};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Headline sample included with every analysis request. The original
/// product ships the same fixed copy; there is no live news feed.
pub const SAMPLE_HEADLINES: [&str; 4] = [
    "Spot ETF girişleri üst üste üçüncü haftada rekor kırdı",
    "Büyük borsalardan soğuk cüzdanlara çıkışlar hızlandı",
    "Fed faiz patikası belirsizliği riskli varlıkları baskılıyor",
    "Ağ aktivitesi ve aktif adres sayısı yıllık zirvede",
];

/// Run a sentiment query for the text currently in the input field.
///
/// Blank input is rejected before any call is made; a query already in
/// flight is not restarted.
pub(crate) fn run_sentiment_query(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (asset, api, epoch) = {
        let mut state = state.write();

        if state.session.is_none() {
            tracing::debug!("Ignoring sentiment query - no active session");
            return;
        }
        let asset = state.sentiment.query_input.trim().to_string();
        if asset.is_empty() {
            tracing::debug!("Ignoring sentiment query - blank input");
            return;
        }
        if state.sentiment.task.is_pending() {
            tracing::debug!("Ignoring sentiment query - analysis already pending");
            return;
        }
        let api = match state.intel_api.clone() {
            Some(api) => api,
            None => {
                tracing::warn!("No intel service configured - skipping sentiment query");
                return;
            }
        };
        state.sentiment.task = TaskState::Pending;
        (asset, api, state.session_epoch)
    };

    spawn(async move {
        tracing::info!(asset = %asset, "Running sentiment analysis");
        let result = api.analyze_sentiment(&asset, &SAMPLE_HEADLINES).await;
        let _ = event_tx.send(AppEvent::SentimentResult { epoch, result }).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{test_state, StubIntel, StubMarket};
    use crate::app::state::SessionUser;
    use std::time::Duration;

    #[tokio::test]
    async fn blank_input_makes_no_call() {
        let intel = Arc::new(StubIntel::default());
        let (state, tx, rx) = test_state(Arc::new(StubMarket::empty()), Some(intel.clone()));
        state.write().session = Some(SessionUser {
            username: "must3y".into(),
            role: "Elite Member".into(),
        });
        state.write().sentiment.query_input = "   ".into();

        run_sentiment_query(state.clone(), tx);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(state.read().sentiment.task.is_idle());
        assert_eq!(intel.sentiment_calls(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn query_without_session_makes_no_call() {
        let intel = Arc::new(StubIntel::default());
        let (state, tx, rx) = test_state(Arc::new(StubMarket::empty()), Some(intel.clone()));
        state.write().sentiment.query_input = "bitcoin".into();

        run_sentiment_query(state.clone(), tx);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(state.read().sentiment.task.is_idle());
        assert_eq!(intel.sentiment_calls(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn query_goes_pending_and_completes() {
        let intel = Arc::new(StubIntel::default());
        let (state, tx, rx) = test_state(Arc::new(StubMarket::empty()), Some(intel.clone()));
        state.write().session = Some(SessionUser {
            username: "must3y".into(),
            role: "Elite Member".into(),
        });
        state.write().sentiment.query_input = "bitcoin".into();

        run_sentiment_query(state.clone(), tx);
        assert!(state.read().sentiment.task.is_pending());

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, AppEvent::SentimentResult { epoch: 0, result: Ok(_) }));
        assert_eq!(intel.sentiment_calls(), 1);
    }

    #[tokio::test]
    async fn pending_query_rejects_reinvocation() {
        let intel = Arc::new(StubIntel::default().with_delay(Duration::from_millis(50)));
        let (state, tx, _rx) = test_state(Arc::new(StubMarket::empty()), Some(intel.clone()));
        state.write().session = Some(SessionUser {
            username: "must3y".into(),
            role: "Elite Member".into(),
        });
        state.write().sentiment.query_input = "ethereum".into();

        run_sentiment_query(state.clone(), tx.clone());
        run_sentiment_query(state.clone(), tx);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(intel.sentiment_calls(), 1);
    }
}
