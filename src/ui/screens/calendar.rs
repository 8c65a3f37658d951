//! # Economic Calendar Screen
//!
//! Static macro calendar rows. Content is display-only.

use crate::ui::theme::Theme;
use egui::RichText;

struct CalendarEntry {
    date: &'static str,
    event: &'static str,
    impact: Impact,
}

enum Impact {
    High,
    Medium,
    Low,
}

const ENTRIES: [CalendarEntry; 5] = [
    CalendarEntry { date: "03 Eyl", event: "ABD Tarım Dışı İstihdam", impact: Impact::High },
    CalendarEntry { date: "10 Eyl", event: "TÜFE Enflasyon Verisi", impact: Impact::High },
    CalendarEntry { date: "17 Eyl", event: "FED Faiz Kararı", impact: Impact::High },
    CalendarEntry { date: "24 Eyl", event: "ECB Basın Toplantısı", impact: Impact::Medium },
    CalendarEntry { date: "30 Eyl", event: "BTC Opsiyon Vadesi", impact: Impact::Low },
];

/// Render the calendar tab
pub fn render(ui: &mut egui::Ui, theme: &Theme) {
    ui.add_space(8.0);
    ui.label(RichText::new("EKONOMİK TAKVİM").size(28.0).strong().color(theme.text));
    ui.add_space(16.0);

    for entry in &ENTRIES {
        let (impact_text, impact_color) = match entry.impact {
            Impact::High => ("YÜKSEK", theme.red),
            Impact::Medium => ("ORTA", theme.yellow),
            Impact::Low => ("DÜŞÜK", theme.green),
        };
        egui::Frame::new()
            .fill(theme.card)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(entry.date).strong().color(theme.accent));
                    ui.label(RichText::new(entry.event).color(theme.text));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(impact_text).strong().color(impact_color));
                    });
                });
            });
        ui.add_space(6.0);
    }
}
