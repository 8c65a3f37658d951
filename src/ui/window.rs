//! # Application Window
//!
//! The eframe host: owns the [`App`], drains completion events each
//! frame, and drives the render pipeline.

use crate::app::App;
use crate::ui::theme::Theme;

/// Top-level eframe application
pub struct TerminalWindow {
    app: App,
}

impl TerminalWindow {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::default().apply(&cc.egui_ctx);
        Self { app: App::new() }
    }
}

impl eframe::App for TerminalWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply async completions before drawing the frame
        self.app.on_tick();

        crate::ui::render(ctx, &mut self.app);

        // Poll cadence for task completions while idle
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
