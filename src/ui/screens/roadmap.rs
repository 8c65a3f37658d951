//! # Roadmap Screen
//!
//! Static product roadmap phases. Content is display-only.

use crate::ui::theme::Theme;
use egui::RichText;

struct Phase {
    title: &'static str,
    detail: &'static str,
    status: Status,
}

enum Status {
    Done,
    Active,
    Planned,
}

const PHASES: [Phase; 4] = [
    Phase {
        title: "FAZ 1 — ÇEKİRDEK TERMİNAL",
        detail: "Giriş kapısı, canlı fiyatlar, merkez panel",
        status: Status::Done,
    },
    Phase {
        title: "FAZ 2 — YAPAY ZEKA KATMANI",
        detail: "Duygu analizi, asistan, balina yorumları",
        status: Status::Active,
    },
    Phase {
        title: "FAZ 3 — CANLI BALİNA AKIŞI",
        detail: "Zincir üstü gerçek zamanlı transfer takibi",
        status: Status::Planned,
    },
    Phase {
        title: "FAZ 4 — PORTFÖY",
        detail: "Cüzdan bağlama ve portföy izleme",
        status: Status::Planned,
    },
];

/// Render the roadmap tab
pub fn render(ui: &mut egui::Ui, theme: &Theme) {
    ui.add_space(8.0);
    ui.label(RichText::new("YOL HARİTASI").size(28.0).strong().color(theme.text));
    ui.add_space(16.0);

    for phase in &PHASES {
        let (status_text, status_color) = match phase.status {
            Status::Done => ("TAMAMLANDI", theme.green),
            Status::Active => ("DEVAM EDİYOR", theme.yellow),
            Status::Planned => ("PLANLANDI", theme.text_dim),
        };
        egui::Frame::new()
            .fill(theme.card)
            .stroke(egui::Stroke::new(1.0, status_color))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(phase.title).strong().color(theme.text));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(status_text).strong().color(status_color));
                    });
                });
                ui.label(RichText::new(phase.detail).color(theme.text_dim));
            });
        ui.add_space(8.0);
    }
}
