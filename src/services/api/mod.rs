//! # External API Clients
//!
//! HTTP clients for the two upstream services the terminal talks to.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs     - Module exports and documentation
//! ├── client.rs  - ApiClient struct and trait wiring
//! ├── market.rs  - CoinGecko simple-price endpoint
//! └── intel.rs   - Gemini generateContent (chat, sentiment, narratives)
//!                  plus the simulated whale feed
//! ```

pub mod client;
pub mod intel;
pub mod market;

pub use client::ApiClient;
pub use intel::{demo_whale_transfers, SentimentLabel, SentimentReport};
pub use market::{AssetQuote, PriceSnapshot};
