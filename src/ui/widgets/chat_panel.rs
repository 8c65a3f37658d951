//! # Assistant Overlay
//!
//! Floating chat window rendered above whichever tab is active. The
//! transcript is drawn from the frame's state snapshot; typing goes
//! straight into shared state so it survives the overlay being closed.

use crate::app::state::{AppState, ChatRole};
use crate::app::App;
use crate::ui::theme::Theme;
use egui::RichText;

/// Render the chat overlay when it is open
pub fn render(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    if !state.chat.open {
        return;
    }

    egui::Window::new(RichText::new("ASİSTAN").strong())
        .default_size(egui::vec2(340.0, 420.0))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            render_transcript(ui, state, theme);
            ui.separator();
            render_input_row(ui, state, app);
        });
}

fn render_transcript(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    egui::ScrollArea::vertical()
        .max_height(320.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if state.chat.transcript.is_empty() {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Sorunu yaz, piyasayı konuşalım.")
                            .color(theme.text_dim),
                    );
                });
            }
            for message in &state.chat.transcript {
                let (align, color, author) = match message.role {
                    ChatRole::User => (egui::Align::RIGHT, theme.accent, "SEN"),
                    ChatRole::Assistant => (egui::Align::LEFT, theme.elevated, "MUST3Y"),
                };
                ui.with_layout(egui::Layout::top_down(align), |ui| {
                    egui::Frame::new()
                        .fill(color.gamma_multiply(0.35))
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::same(8))
                        .show(ui, |ui| {
                            ui.set_max_width(260.0);
                            ui.label(RichText::new(author).size(9.0).color(theme.text_dim));
                            ui.label(RichText::new(&message.text).color(theme.text));
                        });
                });
                ui.add_space(4.0);
            }
            if state.chat.task.is_pending() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("yazıyor...").color(theme.text_dim));
                });
            }
        });
}

fn render_input_row(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let mut input = state.chat.input.clone();
    let mut submit = false;

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut input)
                .desired_width(ui.available_width() - 80.0)
                .hint_text("Mesaj yaz..."),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        if ui.button("GÖNDER").clicked() {
            submit = true;
        }
    });

    // Write edits back outside the snapshot
    if input != state.chat.input {
        app.state.write().chat.input = input;
    }
    if submit {
        app.handle_chat_send();
    }
}
