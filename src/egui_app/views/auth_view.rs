use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    let input_width = 360.0;

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 360.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        let app = state.config.app();
        ui.label(
            egui::RichText::new(format!("🧾 {}", app.app_name))
                .size(32.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new(app.restaurant_name.as_str())
                .size(18.0)
                .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(24.0);

        if let Some(error) = state.session.login_error(Instant::now()) {
            ui.label(egui::RichText::new(error).color(colors::ERROR));
            ui.add_space(10.0);
        }

        if state.session.is_pending() {
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 120.0) / 2.0);
                ui.label(egui::RichText::new("Signing in...").color(colors::TEXT_PRIMARY));
                ui.spinner();
            });
            return;
        }

        styles::card_frame().show(ui, |ui| {
            ui.set_width(input_width);
            ui.label(
                egui::RichText::new("Sign in with Google")
                    .size(18.0)
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(6.0);
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Paste the credential returned by the Google sign-in page.",
            );
            ui.add_space(8.0);
            ui.add(
                egui::TextEdit::multiline(&mut state.credential_input)
                    .hint_text("eyJhbGciOi...")
                    .desired_rows(3)
                    .desired_width(input_width),
            );
            ui.add_space(10.0);

            let ready = !state.credential_input.trim().is_empty();
            if ui
                .add_enabled(ready, styles::primary_button("Sign in").min_size(egui::vec2(120.0, 32.0)))
                .clicked()
            {
                state.session.clear_error();
                state.handle_credential();
            }
        });

        if state.config.dev_auth_bypass() {
            ui.add_space(16.0);
            styles::card_frame().show(ui, |ui| {
                ui.set_width(input_width);
                ui.colored_label(colors::TEXT_SECONDARY, "Development sign-in");
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.dev_email_input)
                            .hint_text("email")
                            .desired_width(input_width - 100.0),
                    );
                    if ui.button("Continue").clicked() {
                        state.session.clear_error();
                        state.handle_dev_login();
                    }
                });
            });
        }
    });
}
