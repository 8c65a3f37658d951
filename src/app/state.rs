//! # Application State Types
//!
//! All state-related types for the terminal: session and login, tab
//! navigation, the market price cache, per-feature async task tracking,
//! whale radar, and the chat overlay.
//!
//! Everything session-scoped lives here and is wiped by
//! [`AppState::reset_session`] on logout. The only thing that survives a
//! logout (besides the service handles) is the monotonically increasing
//! session epoch, which is how in-flight completions from a previous
//! session are recognized and discarded.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::error::AppError;
use crate::core::service::{IntelService, MarketDataService};

/// Dashboard tabs, in navigation order.
///
/// The chat overlay is not a tab: it renders on top of whichever tab is
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Central panel: gauge, sector radar, live assets
    Dashboard,
    /// AI sentiment analysis
    Sentiment,
    /// Whale transfer radar
    Whale,
    /// Economic calendar
    Calendar,
    /// Product roadmap
    Roadmap,
}

impl Tab {
    /// Get all tabs in navigation order
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Dashboard,
            Tab::Sentiment,
            Tab::Whale,
            Tab::Calendar,
            Tab::Roadmap,
        ]
    }

    /// Get tab display title (the product UI is Turkish)
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "MERKEZ PANEL",
            Tab::Sentiment => "DUYGU ANALİZİ",
            Tab::Whale => "BALİNA RADARI",
            Tab::Calendar => "EKONOMİK TAKVİM",
            Tab::Roadmap => "YOL HARİTASI",
        }
    }

    /// Get the stable identifier used for name-based navigation
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Sentiment => "sentiment",
            Tab::Whale => "whale",
            Tab::Calendar => "calendar",
            Tab::Roadmap => "roadmap",
        }
    }

    /// Resolve a tab from its identifier.
    ///
    /// Unknown names are rejected so a bad caller cannot move navigation
    /// into a view that does not exist.
    pub fn parse(name: &str) -> crate::core::error::Result<Tab> {
        Tab::all()
            .iter()
            .copied()
            .find(|t| t.id() == name)
            .ok_or_else(|| AppError::InvalidNavigationTarget(name.to_string()))
    }
}

/// Login form state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Fixed rejection line, shown until the next attempt
    pub error: Option<String>,
}

/// Identity of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
    pub role: String,
}

/// Lifecycle of one feature's async work.
///
/// Exactly one instance exists per feature, and at most one invocation may
/// be pending at a time; handlers check [`TaskState::is_pending`] before
/// spawning. `Succeeded`/`Failed` are terminal for the invocation but accept
/// a new one (which replaces the stored outcome).
#[derive(Debug, Clone, PartialEq)]
pub enum TaskState<T> {
    /// Nothing running, no outcome yet
    Idle,
    /// An invocation is in flight
    Pending,
    /// Last invocation completed with a result
    Succeeded(T),
    /// Last invocation failed
    Failed(AppError),
}

impl<T> TaskState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskState::Pending)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TaskState::Idle)
    }
}

impl<T> Default for TaskState<T> {
    fn default() -> Self {
        TaskState::Idle
    }
}

/// Static description of a tracked asset
pub struct AssetSpec {
    /// CoinGecko asset id
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Assets the terminal tracks. Fixed at session start.
pub const TRACKED_ASSETS: [AssetSpec; 4] = [
    AssetSpec {
        id: "bitcoin",
        name: "Bitcoin",
        symbol: "BTC",
    },
    AssetSpec {
        id: "ethereum",
        name: "Ethereum",
        symbol: "ETH",
    },
    AssetSpec {
        id: "solana",
        name: "Solana",
        symbol: "SOL",
    },
    AssetSpec {
        id: "ripple",
        name: "XRP",
        symbol: "XRP",
    },
];

/// Cached quote for a single tracked asset
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedAsset {
    /// CoinGecko asset id
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Last known price in USD; 0.0 until the first successful fetch
    pub price: f64,
    /// 24h change in percent; None until the first successful fetch
    pub change_24h: Option<f64>,
}

/// Market price cache
#[derive(Debug, Clone, PartialEq)]
pub struct MarketState {
    /// Tracked assets with their last known values
    pub assets: Vec<TrackedAsset>,
    /// When the cache last applied a successful snapshot
    pub last_refresh: Option<DateTime<Utc>>,
    /// Flag to prevent concurrent refreshes (prevents task pileup)
    pub refresh_in_flight: bool,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            assets: TRACKED_ASSETS
                .iter()
                .map(|spec| TrackedAsset {
                    id: spec.id.to_string(),
                    name: spec.name.to_string(),
                    symbol: spec.symbol.to_string(),
                    price: 0.0,
                    change_24h: None,
                })
                .collect(),
            last_refresh: None,
            refresh_in_flight: false,
        }
    }
}

/// Fear & Greed gauge reading
#[derive(Debug, Clone, PartialEq)]
pub struct FearGreedIndex {
    /// 0-100
    pub value: u8,
    pub label: String,
}

impl Default for FearGreedIndex {
    fn default() -> Self {
        Self {
            value: 68,
            label: "AÇGÖZLÜLÜK".to_string(),
        }
    }
}

/// Direction a sector is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// One tile in the sector radar heatmap
#[derive(Debug, Clone, PartialEq)]
pub struct SectorPulse {
    pub name: String,
    /// Strength score, 0-100
    pub score: u8,
    pub trend: Trend,
}

/// Sector radar content shown on the dashboard
pub fn default_sectors() -> Vec<SectorPulse> {
    [
        ("AI", 88, Trend::Up),
        ("DeFi", 45, Trend::Down),
        ("Meme", 72, Trend::Up),
        ("L1", 64, Trend::Neutral),
        ("RWA", 91, Trend::Up),
        ("GameFi", 38, Trend::Down),
    ]
    .into_iter()
    .map(|(name, score, trend)| SectorPulse {
        name: name.to_string(),
        score,
        trend,
    })
    .collect()
}

/// Sentiment analysis view state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SentimentState {
    /// Asset or topic being analyzed (free text)
    pub query_input: String,
    pub task: TaskState<crate::services::api::SentimentReport>,
}

/// A large transfer picked up by the radar
#[derive(Debug, Clone, PartialEq)]
pub struct WhaleTransfer {
    pub id: String,
    pub from_label: String,
    pub to_label: String,
    pub asset_symbol: String,
    /// Amount in the asset's own unit
    pub amount: f64,
    pub usd_value: f64,
    pub observed_at: DateTime<Utc>,
}

/// Whale radar view state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WhaleState {
    /// Idle = radar inactive; Succeeded = feed active until logout
    pub scan: TaskState<Vec<WhaleTransfer>>,
    /// AI narrative for one transfer
    pub explain: TaskState<String>,
    /// Which transfer the narrative belongs to
    pub explain_target: Option<String>,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Chat overlay state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatState {
    /// Overlay visibility; the transcript survives toggling
    pub open: bool,
    /// Current message input text
    pub input: String,
    /// Messages in insertion order
    pub transcript: Vec<ChatMessage>,
    /// Pending while a reply is in flight; back to Idle after either outcome
    pub task: TaskState<()>,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Active session, None while the login gate is up
    pub session: Option<SessionUser>,
    /// Monotonic counter identifying the current session. Bumped on logout;
    /// completions stamped with an older epoch are discarded.
    pub session_epoch: u64,
    /// Current active tab
    pub active_tab: Tab,
    /// Login form state
    pub login: LoginForm,
    /// Market price cache
    pub market: MarketState,
    /// Fear & Greed gauge content
    pub fear_greed: FearGreedIndex,
    /// Sector radar content
    pub sectors: Vec<SectorPulse>,
    /// Sentiment analysis state
    pub sentiment: SentimentState,
    /// Whale radar state
    pub whale: WhaleState,
    /// Chat overlay state
    pub chat: ChatState,
    /// Market data service
    pub market_api: Option<Arc<dyn MarketDataService>>,
    /// AI intelligence service
    pub intel_api: Option<Arc<dyn IntelService>>,
}

impl AppState {
    /// Check if a session is active
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// End the current session.
    ///
    /// Bumps the epoch (so stragglers from this session are discarded on
    /// arrival, and the poller exits at its next wakeup) and resets every
    /// session-scoped field to its pristine default. Service handles are
    /// kept; a re-login starts from a clean slate.
    pub fn reset_session(&mut self) {
        self.session_epoch += 1;
        self.session = None;
        self.active_tab = Tab::Dashboard;
        self.login = LoginForm::default();
        self.market = MarketState::default();
        self.sentiment = SentimentState::default();
        self.whale = WhaleState::default();
        self.chat = ChatState::default();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: None,
            session_epoch: 0,
            active_tab: Tab::Dashboard,
            login: LoginForm::default(),
            market: MarketState::default(),
            fear_greed: FearGreedIndex::default(),
            sectors: default_sectors(),
            sentiment: SentimentState::default(),
            whale: WhaleState::default(),
            chat: ChatState::default(),
            market_api: None,
            intel_api: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Tab Tests ==========

    #[test]
    fn tab_all_is_navigation_order() {
        assert_eq!(
            Tab::all(),
            &[
                Tab::Dashboard,
                Tab::Sentiment,
                Tab::Whale,
                Tab::Calendar,
                Tab::Roadmap
            ]
        );
    }

    #[test]
    fn tab_parse_round_trips_every_id() {
        for tab in Tab::all() {
            assert_eq!(Tab::parse(tab.id()).unwrap(), *tab);
        }
    }

    #[test]
    fn tab_parse_rejects_unknown() {
        let err = Tab::parse("settings").unwrap_err();
        assert_eq!(err, AppError::InvalidNavigationTarget("settings".into()));
        // Ids are lowercase; display titles are not valid targets
        assert!(Tab::parse("MERKEZ PANEL").is_err());
        assert!(Tab::parse("").is_err());
    }

    // ========== Default State Tests ==========

    #[test]
    fn default_state_is_logged_out_dashboard() {
        let state = AppState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.session_epoch, 0);
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert!(state.chat.transcript.is_empty());
        assert!(state.whale.scan.is_idle());
    }

    #[test]
    fn tracked_assets_start_at_zero() {
        let market = MarketState::default();
        assert_eq!(market.assets.len(), 4);
        assert_eq!(market.assets[0].id, "bitcoin");
        assert_eq!(market.assets[0].symbol, "BTC");
        for asset in &market.assets {
            assert_eq!(asset.price, 0.0);
            assert_eq!(asset.change_24h, None);
        }
        assert!(market.last_refresh.is_none());
        assert!(!market.refresh_in_flight);
    }

    #[test]
    fn default_dashboard_content_matches_product_data() {
        let state = AppState::default();
        assert_eq!(state.fear_greed.value, 68);
        assert_eq!(state.fear_greed.label, "AÇGÖZLÜLÜK");
        assert_eq!(state.sectors.len(), 6);
        assert_eq!(state.sectors[0].name, "AI");
        assert_eq!(state.sectors[0].score, 88);
        assert_eq!(state.sectors[4].name, "RWA");
        assert_eq!(state.sectors[4].trend, Trend::Up);
    }

    // ========== Session Reset Tests ==========

    #[test]
    fn reset_session_bumps_epoch_and_wipes_state() {
        let mut state = AppState::default();
        state.session = Some(SessionUser {
            username: "must3y".into(),
            role: "Elite Member".into(),
        });
        state.active_tab = Tab::Whale;
        state.chat.open = true;
        state.chat.transcript.push(ChatMessage {
            role: ChatRole::User,
            text: "selam".into(),
            sent_at: Utc::now(),
        });
        state.whale.scan = TaskState::Pending;
        state.market.assets[0].price = 64_250.0;
        state.market.refresh_in_flight = true;

        state.reset_session();

        assert_eq!(state.session_epoch, 1);
        assert!(!state.is_authenticated());
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert!(state.chat.transcript.is_empty());
        assert!(!state.chat.open);
        assert!(state.whale.scan.is_idle());
        assert_eq!(state.market.assets[0].price, 0.0);
        assert!(!state.market.refresh_in_flight);
    }

    #[test]
    fn epoch_only_ever_increases() {
        let mut state = AppState::default();
        state.reset_session();
        state.reset_session();
        state.reset_session();
        assert_eq!(state.session_epoch, 3);
    }
}
