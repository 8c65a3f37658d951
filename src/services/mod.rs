//! # Services Module
//!
//! External integrations and the credential store.
//!
//! ```text
//! services/
//! ├── api/     - HTTP clients (CoinGecko market data, Gemini intelligence)
//! └── auth.rs  - Fixed credential table and verification
//! ```
//!
//! The API surface is reached through the [`crate::core::service`] traits;
//! the rest of the application never names a concrete client.

pub mod api;
pub mod auth;
