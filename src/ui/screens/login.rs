//! # Login Screen
//!
//! The access gate: brand header, credential form, and the fixed
//! rejection line on failure. Nothing behind the gate renders until
//! authentication succeeds.

use crate::app::state::AppState;
use crate::app::App;
use crate::ui::theme::Theme;
use egui::RichText;

/// Render the login gate
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.add_space(ui.available_height() * 0.22);

    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .fill(theme.card)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .corner_radius(egui::CornerRadius::same(16))
            .inner_margin(egui::Margin::same(32))
            .show(ui, |ui| {
                ui.set_width(320.0);

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("MUST3Y").size(32.0).strong().color(theme.text));
                    ui.label(
                        RichText::new("KRİPTO İSTİHBARAT TERMİNALİ")
                            .size(10.0)
                            .color(theme.text_dim),
                    );
                });
                ui.add_space(24.0);

                let mut username = state.login.username.clone();
                let mut password = state.login.password.clone();
                let mut submit = false;

                ui.add(
                    egui::TextEdit::singleline(&mut username)
                        .hint_text("Giriş Kimliği")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(10.0);
                let password_response = ui.add(
                    egui::TextEdit::singleline(&mut password)
                        .hint_text("Şifre")
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                if password_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    submit = true;
                }

                if username != state.login.username || password != state.login.password {
                    let mut locked = app.state.write();
                    locked.login.username = username;
                    locked.login.password = password;
                }

                if let Some(error) = &state.login.error {
                    ui.add_space(10.0);
                    ui.label(RichText::new(error).color(theme.red).strong());
                }

                ui.add_space(18.0);
                let button = egui::Button::new(RichText::new("GİRİŞ YAP").strong())
                    .fill(theme.accent)
                    .min_size(egui::vec2(ui.available_width(), 42.0));
                if ui.add(button).clicked() {
                    submit = true;
                }

                if submit {
                    app.handle_login_click();
                }
            });
    });
}
