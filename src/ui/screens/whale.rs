//! # Whale Radar Screen
//!
//! Radar activation, the transfer feed, and per-transfer AI narratives.
//! The feed stays active until logout; a re-scan replaces it.

use crate::app::state::{AppState, TaskState, WhaleTransfer};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::utils::format::{format_compact_usd, format_number, format_relative_time_tr};
use egui::RichText;

/// Render the whale radar tab
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.add_space(8.0);
    ui.label(RichText::new("BALİNA RADARI").size(28.0).strong().color(theme.text));
    ui.add_space(16.0);

    match &state.whale.scan {
        TaskState::Idle => {
            ui.label(
                RichText::new("Radar kapalı. Büyük transferleri görmek için taramayı başlat.")
                    .color(theme.text_dim),
            );
            ui.add_space(12.0);
            if ui
                .add(egui::Button::new(RichText::new("RADARI BAŞLAT").strong()).fill(theme.accent))
                .clicked()
            {
                app.handle_whale_scan();
            }
        }
        TaskState::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Zincir taranıyor...").color(theme.text_dim));
            });
        }
        TaskState::Succeeded(transfers) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("● RADAR AKTİF").color(theme.green).strong());
                if ui.button("YENİDEN TARA").clicked() {
                    app.handle_whale_scan();
                }
            });
            ui.add_space(12.0);
            for transfer in transfers {
                render_transfer_row(ui, state, app, theme, transfer);
                ui.add_space(8.0);
            }
        }
        TaskState::Failed(error) => {
            ui.label(RichText::new(format!("Tarama başarısız: {}", error)).color(theme.red));
            ui.add_space(8.0);
            if ui.button("TEKRAR DENE").clicked() {
                app.handle_whale_scan();
            }
        }
    }
}

fn render_transfer_row(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
    transfer: &WhaleTransfer,
) {
    egui::Frame::new()
        .fill(theme.card)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{} → {}", transfer.from_label, transfer.to_label))
                        .strong()
                        .color(theme.text),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format_relative_time_tr(
                            transfer.observed_at,
                            chrono::Utc::now(),
                        ))
                        .size(10.0)
                        .color(theme.text_dim),
                    );
                });
            });
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        format_number(transfer.amount, 0),
                        transfer.asset_symbol
                    ))
                    .color(theme.yellow),
                );
                ui.label(
                    RichText::new(format_compact_usd(transfer.usd_value))
                        .strong()
                        .color(theme.green),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let explaining = state.whale.explain.is_pending();
                    if ui
                        .add_enabled(!explaining, egui::Button::new("YORUMLA"))
                        .clicked()
                    {
                        app.handle_transfer_explain(&transfer.id);
                    }
                });
            });

            // Narrative attaches to the row it was requested for
            if state.whale.explain_target.as_deref() == Some(transfer.id.as_str()) {
                ui.add_space(6.0);
                match &state.whale.explain {
                    TaskState::Pending => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(RichText::new("Yorumlanıyor...").color(theme.text_dim));
                        });
                    }
                    TaskState::Succeeded(narrative) => {
                        ui.label(RichText::new(narrative).italics().color(theme.text_dim));
                    }
                    TaskState::Failed(error) => {
                        ui.label(
                            RichText::new(format!("Yorum alınamadı: {}", error))
                                .color(theme.red),
                        );
                    }
                    TaskState::Idle => {}
                }
            }
        });
}
