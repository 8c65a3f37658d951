//! # GUI Rendering
//!
//! Frame rendering pipeline for the terminal, built on egui.
//!
//! Rendering works on a **cloned state snapshot**: the render function
//! takes one `try_read` at the top of the frame, clones the state, and
//! draws without holding any lock. User actions go back through the
//! `App::handle_*` methods, which take their own short locks.

pub mod screens;
pub mod theme;
pub mod widgets;
pub mod window;

use crate::app::{App, Tab};
use theme::Theme;

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App) {
    // One snapshot per frame; skip the frame if a task holds the lock
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    let theme = Theme::default();

    if !state.is_authenticated() {
        egui::CentralPanel::default().show(ctx, |ui| {
            screens::login::render(ui, &state, app, &theme);
        });
        return;
    }

    egui::SidePanel::left("nav_panel")
        .exact_width(220.0)
        .resizable(false)
        .show(ctx, |ui| {
            widgets::nav_bar::render(ui, &state, app, &theme);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match state.active_tab {
            Tab::Dashboard => screens::dashboard::render(ui, &state, &theme),
            Tab::Sentiment => screens::sentiment::render(ui, &state, app, &theme),
            Tab::Whale => screens::whale::render(ui, &state, app, &theme),
            Tab::Calendar => screens::calendar::render(ui, &theme),
            Tab::Roadmap => screens::roadmap::render(ui, &theme),
        });
    });

    // Chat floats above every tab
    widgets::chat_panel::render(ctx, &state, app, &theme);
}
