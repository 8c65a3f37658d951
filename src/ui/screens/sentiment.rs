//! # Sentiment Analysis Screen
//!
//! Free-text asset query, one analysis in flight at a time, and the
//! structured report once it lands.

use crate::app::state::{AppState, TaskState};
use crate::app::App;
use crate::services::api::SentimentLabel;
use crate::ui::theme::Theme;
use egui::RichText;

/// Render the sentiment tab
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.add_space(8.0);
    ui.label(RichText::new("DUYGU ANALİZİ").size(28.0).strong().color(theme.text));
    ui.add_space(16.0);

    let pending = state.sentiment.task.is_pending();
    let mut query = state.sentiment.query_input.clone();
    let mut submit = false;

    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            !pending,
            egui::TextEdit::singleline(&mut query)
                .hint_text("Varlık veya konu (örn. bitcoin)")
                .desired_width(280.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        if ui
            .add_enabled(!pending, egui::Button::new("ANALİZ ET").fill(theme.accent))
            .clicked()
        {
            submit = true;
        }
    });

    if query != state.sentiment.query_input {
        app.state.write().sentiment.query_input = query;
    }
    if submit {
        app.handle_sentiment_query();
    }

    ui.add_space(20.0);

    match &state.sentiment.task {
        TaskState::Idle => {
            ui.label(
                RichText::new("Bir varlık gir, piyasa duygusunu skorlayalım.")
                    .color(theme.text_dim),
            );
        }
        TaskState::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Analiz ediliyor...").color(theme.text_dim));
            });
        }
        TaskState::Succeeded(report) => {
            let color = match report.label {
                SentimentLabel::Positive => theme.green,
                SentimentLabel::Negative => theme.red,
            };
            let verdict = match report.label {
                SentimentLabel::Positive => "POZİTİF",
                SentimentLabel::Negative => "NEGATİF",
            };
            egui::Frame::new()
                .fill(theme.card)
                .stroke(egui::Stroke::new(1.0, color))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(report.score.to_string())
                                .size(40.0)
                                .strong()
                                .color(color),
                        );
                        ui.label(RichText::new(verdict).size(16.0).strong().color(color));
                    });
                    ui.add_space(8.0);
                    ui.label(RichText::new(&report.analysis).color(theme.text));
                    ui.add_space(6.0);
                    ui.label(RichText::new(&report.note).size(11.0).color(theme.text_dim));
                });
        }
        TaskState::Failed(error) => {
            ui.label(
                RichText::new(format!("Analiz başarısız: {}", error)).color(theme.red),
            );
        }
    }
}
