//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection
//!   (`MarketDataService`, `IntelService`)
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust,no_run
//! use must3y::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! Service traits let tests swap the live clients for mocks: production code
//! builds an `ApiClient` and stores it as `Arc<dyn MarketDataService>` /
//! `Arc<dyn IntelService>`; tests hand `App::with_services` whatever
//! implementations the scenario needs.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{IntelService, MarketDataService};
