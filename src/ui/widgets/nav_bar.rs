//! # Side Navigation
//!
//! Brand header, tab buttons, assistant toggle, and the session badge
//! with logout. Only rendered when a session is active.

use crate::app::{App, AppState, Tab};
use crate::ui::theme::Theme;
use egui::RichText;

/// Render the left navigation panel
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("MUST3Y")
                .size(26.0)
                .strong()
                .color(theme.text),
        );
        ui.label(RichText::new("KRİPTO İSTİHBARAT").size(10.0).color(theme.text_dim));
    });
    ui.add_space(20.0);
    ui.separator();
    ui.add_space(12.0);

    for tab in Tab::all() {
        let active = state.active_tab == *tab;
        let text = if active {
            RichText::new(tab.title()).strong().color(theme.accent)
        } else {
            RichText::new(tab.title()).color(theme.text_dim)
        };
        let button = egui::Button::new(text)
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add(button).clicked() {
            if let Err(e) = app.select_tab(*tab) {
                tracing::warn!(error = %e, "Tab selection rejected");
            }
        }
        ui.add_space(4.0);
    }

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(8.0);

    let chat_label = if state.chat.open { "ASİSTANI GİZLE" } else { "ASİSTAN" };
    if ui
        .add(egui::Button::new(chat_label).min_size(egui::vec2(ui.available_width(), 32.0)))
        .clicked()
    {
        app.handle_chat_toggle();
    }

    // Session badge pinned to the bottom
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(16.0);
        if ui
            .add(egui::Button::new(RichText::new("ÇIKIŞ").color(theme.red)))
            .clicked()
        {
            app.handle_logout_click();
        }
        ui.add_space(4.0);
        if let Some(user) = &state.session {
            ui.label(RichText::new(&user.role).size(10.0).color(theme.text_dim));
            ui.label(RichText::new(&user.username).strong().color(theme.text));
        }
    });
}
