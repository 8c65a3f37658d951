//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! This module provides a centralized error type [`AppError`] that covers all error
//! scenarios in the application.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **InvalidCredentials**: Login rejection (never reveals which field failed)
//! - **Fetch**: Market data fetch failures (network, HTTP, JSON parsing)
//! - **AiRequest**: AI endpoint transport or status failures
//! - **InvalidAiResponse**: AI payload did not match the expected shape
//! - **InvalidNavigationTarget**: Unknown tab name (programming error)
//! - **Validation**: Input validation failures (blank input, missing session)
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use must3y::core::error::{AppError, Result};
//!
//! fn validate_query(input: &str) -> Result<String> {
//!     if input.trim().is_empty() {
//!         return Err(AppError::Validation("Query cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! Errors ride completion events across the async boundary, so the type is
//! `Clone` and `PartialEq` (tests assert on exact variants).

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the terminal.
///
/// Each failed operation maps to exactly one variant. Variants carrying a
/// `String` include a descriptive message for context; the `#[error]`
/// attribute from `thiserror` provides `Display` and `Error` implementations.
///
/// # Example
///
/// ```rust
/// use must3y::core::error::AppError;
///
/// let fetch_err = AppError::Fetch("Connection timeout".to_string());
/// let nav_err = AppError::InvalidNavigationTarget("SETTINGS".to_string());
///
/// assert_eq!(fetch_err.to_string(), "Fetch error: Connection timeout");
/// assert_eq!(nav_err.to_string(), "Unknown view target: SETTINGS");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Login rejected.
    ///
    /// Deliberately carries no detail: the UI shows one fixed rejection
    /// line and never hints whether the username or the password missed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Market data fetch error.
    ///
    /// Used for errors while refreshing the price cache:
    /// - Network failures (connection refused, timeout, DNS errors)
    /// - HTTP errors (4xx client errors, 5xx server errors)
    /// - JSON parsing errors (malformed responses)
    ///
    /// The event handler treats these as silent: the cache keeps its last
    /// known values and the next poll cycle tries again.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// AI endpoint request error.
    ///
    /// Transport failures, non-success status codes, or a missing API key
    /// when calling the generative endpoint.
    #[error("AI request failed: {0}")]
    AiRequest(String),

    /// AI response shape error.
    ///
    /// The endpoint answered, but the payload was unusable:
    /// - No candidates / empty parts
    /// - Structured output that is not valid JSON
    /// - Out-of-range values (e.g. a sentiment score above 100)
    #[error("Unexpected AI response: {0}")]
    InvalidAiResponse(String),

    /// Unknown navigation target.
    ///
    /// Raised when a tab name does not match any known view. Callers keep
    /// their prior state; this indicates a programming error, not user
    /// input.
    #[error("Unknown view target: {0}")]
    InvalidNavigationTarget(String),

    /// Input validation error.
    ///
    /// Used for user input and precondition failures:
    /// - Blank chat or sentiment input
    /// - Feature access without an active session
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// Use this throughout the crate for consistent error handling:
///
/// ```rust
/// use must3y::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Fetch(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Fetch(msg.to_string())
    }
}
