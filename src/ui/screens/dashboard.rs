//! # Central Panel
//!
//! The main dashboard: Fear & Greed gauge, live asset ticker, and the
//! sector radar heatmap. Pure display, no actions besides what the nav
//! bar offers.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::{gauge, heatmap};
use crate::utils::format::{format_percentage, format_usd};
use egui::RichText;

/// Render the central panel
pub fn render(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.add_space(8.0);
    ui.label(RichText::new("MERKEZ PANEL").size(28.0).strong().color(theme.text));
    ui.add_space(16.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], theme, |ui| {
            ui.vertical_centered(|ui| {
                gauge::render(ui, state.fear_greed.value, &state.fear_greed.label, theme);
            });
        });

        card(&mut columns[1], theme, |ui| {
            ui.label(RichText::new("CANLI VARLIKLAR").strong().color(theme.text));
            ui.add_space(8.0);
            for asset in &state.market.assets {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&asset.symbol).strong().color(theme.text));
                    ui.label(RichText::new(&asset.name).color(theme.text_dim));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match asset.change_24h {
                            Some(change) => {
                                ui.label(
                                    RichText::new(format_percentage(change))
                                        .color(theme.price_change_color(change)),
                                );
                            }
                            None => {
                                ui.label(RichText::new("—").color(theme.text_dim));
                            }
                        }
                        ui.label(RichText::new(format_usd(asset.price)).color(theme.text));
                    });
                });
                ui.separator();
            }
            if let Some(refreshed) = state.market.last_refresh {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!(
                        "Son güncelleme: {}",
                        crate::utils::format::format_relative_time_tr(
                            refreshed,
                            chrono::Utc::now()
                        )
                    ))
                    .size(10.0)
                    .color(theme.text_dim),
                );
            }
        });
    });

    ui.add_space(16.0);
    card(ui, theme, |ui| {
        ui.label(RichText::new("SEKTÖR RADARI").strong().color(theme.text));
        ui.add_space(8.0);
        heatmap::render(ui, &state.sectors, theme);
    });
}

fn card(ui: &mut egui::Ui, theme: &Theme, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(theme.card)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
        .show(ui, add_contents);
}
