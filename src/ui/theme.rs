//! # GUI Theme
//!
//! Dark slate theme for the intelligence terminal. High-contrast cards on
//! a near-black background, with the green/red/yellow accent triple shared
//! by the gauge, the heatmap, and the price ticker.

use egui::{Color32, Context, Stroke, Visuals};
use egui::Theme as EguiTheme;

use crate::app::state::Trend;

/// Color palette used by every screen and widget
#[derive(Debug, Clone)]
pub struct Theme {
    /// Near-black slate background
    pub background: Color32,
    /// Card background
    pub card: Color32,
    /// Raised card / input background
    pub elevated: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text (labels, timestamps)
    pub text_dim: Color32,
    /// Subtle card border
    pub border: Color32,
    /// Accent for the active tab and primary buttons
    pub accent: Color32,
    /// Gains, greed, uptrend
    pub green: Color32,
    /// Losses, fear, downtrend
    pub red: Color32,
    /// Mid-range readings, neutral trend
    pub yellow: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(2, 6, 23),
            card: Color32::from_rgb(15, 23, 42),
            elevated: Color32::from_rgb(30, 41, 59),
            text: Color32::from_rgb(248, 250, 252),
            text_dim: Color32::from_rgb(148, 163, 184),
            border: Color32::from_rgb(51, 65, 85),
            accent: Color32::from_rgb(37, 99, 235),
            green: Color32::from_rgb(34, 197, 94),
            red: Color32::from_rgb(239, 68, 68),
            yellow: Color32::from_rgb(234, 179, 8),
        }
    }
}

impl Theme {
    /// Color for a 24h change value
    pub fn price_change_color(&self, change: f64) -> Color32 {
        if change >= 0.0 {
            self.green
        } else {
            self.red
        }
    }

    /// Format price change with sign and color
    pub fn format_price_change(&self, change: f64) -> (String, Color32) {
        (
            crate::utils::format::format_percentage(change),
            self.price_change_color(change),
        )
    }

    /// Color for a sector trend
    pub fn trend_color(&self, trend: Trend) -> Color32 {
        match trend {
            Trend::Up => self.green,
            Trend::Down => self.red,
            Trend::Neutral => self.yellow,
        }
    }

    /// Gauge color thresholds: greed above 70, fear below 30
    pub fn gauge_color(&self, value: u8) -> Color32 {
        if value > 70 {
            self.green
        } else if value < 30 {
            self.red
        } else {
            self.yellow
        }
    }

    /// Build egui Visuals from the palette
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.faint_bg_color = self.card;
        visuals.extreme_bg_color = Color32::from_rgb(8, 12, 28);

        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text);

        visuals.widgets.inactive.bg_fill = self.elevated;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.weak_bg_fill = self.elevated;

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 53, 76);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.accent);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, self.accent);

        visuals.selection.bg_fill =
            Color32::from_rgba_unmultiplied(37, 99, 235, 76);
        visuals.selection.stroke = Stroke::new(1.5, self.accent);

        visuals.hyperlink_color = self.accent;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        // style_mut_of instead of set_visuals, per egui 0.33
        ctx.style_mut_of(EguiTheme::Dark, |style| {
            style.visuals = visuals.clone();
            style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
            style.spacing.window_margin = egui::Margin::same(12);
            style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
            style.spacing.indent = 16.0;
        });
    }
}
