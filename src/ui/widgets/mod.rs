//! # Reusable Widgets
//!
//! Shared components used across screens:
//!
//! - **[`nav_bar`]**: Side navigation with tab buttons, user badge, logout
//! - **[`gauge`]**: Painted arc gauge (Fear & Greed)
//! - **[`heatmap`]**: Sector radar tile grid
//! - **[`chat_panel`]**: Floating assistant overlay

pub mod chat_panel;
pub mod gauge;
pub mod heatmap;
pub mod nav_bar;
