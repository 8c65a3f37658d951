//! # Arc Gauge
//!
//! Painted semicircular gauge for the Fear & Greed reading. The fill arc
//! covers `value / 100` of the semicircle and takes the threshold color
//! from the theme (greed green above 70, fear red below 30).

use crate::ui::theme::Theme;
use egui::{Pos2, RichText, Stroke, Vec2};

const ARC_SEGMENTS: usize = 64;
const STROKE_WIDTH: f32 = 10.0;

/// Render the gauge with the value and its label underneath
pub fn render(ui: &mut egui::Ui, value: u8, label: &str, theme: &Theme) {
    let desired = Vec2::new(200.0, 130.0);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter();

    let center = Pos2::new(rect.center().x, rect.bottom() - 24.0);
    let radius = 80.0_f32;
    let color = theme.gauge_color(value);

    // Background track, full semicircle
    paint_arc(painter, center, radius, 1.0, Stroke::new(STROKE_WIDTH, theme.border));
    // Fill arc, left to right
    let fraction = f32::from(value.min(100)) / 100.0;
    paint_arc(painter, center, radius, fraction, Stroke::new(STROKE_WIDTH, color));

    painter.text(
        Pos2::new(center.x, center.y - 26.0),
        egui::Align2::CENTER_CENTER,
        value.to_string(),
        egui::FontId::proportional(36.0),
        theme.text,
    );
    painter.text(
        Pos2::new(center.x, center.y - 2.0),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(11.0),
        color,
    );

    ui.add_space(4.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("KORKU & AÇGÖZLÜLÜK").size(10.0).color(theme.text_dim));
    });
}

/// Paint a fraction of the top semicircle as connected line segments.
///
/// Angle runs from PI (left) to 2*PI (right); screen y grows downward, so
/// the arc bends above the center.
fn paint_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    fraction: f32,
    stroke: Stroke,
) {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return;
    }
    let steps = ((ARC_SEGMENTS as f32) * fraction).ceil() as usize;
    let sweep = std::f32::consts::PI * fraction;
    let points: Vec<Pos2> = (0..=steps)
        .map(|i| {
            let angle = std::f32::consts::PI + sweep * (i as f32) / (steps as f32);
            Pos2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();
    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], stroke);
    }
}
