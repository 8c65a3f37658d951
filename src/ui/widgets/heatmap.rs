//! # Sector Radar Heatmap
//!
//! Tile grid of sector pulses. Tiles are colored by trend and show the
//! strength score with a direction marker.

use crate::app::state::{SectorPulse, Trend};
use crate::ui::theme::Theme;
use egui::RichText;

/// Render the sector tiles in a three-column grid
pub fn render(ui: &mut egui::Ui, sectors: &[SectorPulse], theme: &Theme) {
    egui::Grid::new("sector_heatmap")
        .num_columns(3)
        .spacing(egui::vec2(8.0, 8.0))
        .show(ui, |ui| {
            for (i, sector) in sectors.iter().enumerate() {
                render_tile(ui, sector, theme);
                if (i + 1) % 3 == 0 {
                    ui.end_row();
                }
            }
        });
}

fn render_tile(ui: &mut egui::Ui, sector: &SectorPulse, theme: &Theme) {
    let color = theme.trend_color(sector.trend);
    let marker = match sector.trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Neutral => "●",
    };

    egui::Frame::new()
        .fill(theme.elevated)
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(90.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&sector.name).strong().color(theme.text));
                ui.label(
                    RichText::new(format!("{} {}", sector.score, marker))
                        .size(16.0)
                        .color(color),
                );
            });
        });
}
