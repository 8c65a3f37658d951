//! # Screen Modules
//!
//! One rendering module per view. All screens follow the same pattern:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
//!     // Read from the state snapshot, draw, route actions to app.handle_*
//! }
//! ```
//!
//! Static screens (calendar, roadmap) drop the parameters they do not
//! need.

pub mod calendar;
pub mod dashboard;
pub mod login;
pub mod roadmap;
pub mod sentiment;
pub mod whale;
