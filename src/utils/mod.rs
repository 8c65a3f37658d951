//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`format`]**: Display formatting (prices, percentages, relative time)

pub mod format;
