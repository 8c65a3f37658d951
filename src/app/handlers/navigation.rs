//! # Navigation Handlers
//!
//! Tab selection with the authentication guard.

use crate::app::state::{AppState, Tab};
use crate::core::error::{AppError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Switch the active tab.
///
/// Requires an active session; without one the call fails and the prior
/// tab is kept. Selecting the already-active tab is a no-op success.
///
/// Internal handler function - use [`crate::app::App::select_tab`] instead.
pub(crate) fn select_tab(state: Arc<RwLock<AppState>>, tab: Tab) -> Result<()> {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped tab selection - state locked");
            return Ok(());
        }
    };

    if !state.is_authenticated() {
        return Err(AppError::Validation(
            "Navigation requires an active session".to_string(),
        ));
    }

    state.active_tab = tab;
    Ok(())
}

/// Resolve a tab by name and switch to it.
///
/// Unknown names fail with [`AppError::InvalidNavigationTarget`] and leave
/// the active tab untouched.
pub(crate) fn select_tab_by_name(state: Arc<RwLock<AppState>>, name: &str) -> Result<()> {
    let tab = Tab::parse(name)?;
    select_tab(state, tab)
}
