use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::empty_state;

/// Read-only user list for Management
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("👥 Users")
            .size(18.0)
            .strong()
            .color(colors::TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    if state.users.is_empty() {
        if state.is_loading() {
            ui.spinner();
        } else {
            empty_state(ui, "No users found.");
        }
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::Grid::new("users_grid")
                .num_columns(3)
                .striped(true)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Name");
                    ui.strong("Email");
                    ui.strong("Role");
                    ui.end_row();
                    for user in &state.users {
                        ui.label(user.name.as_str());
                        ui.colored_label(colors::TEXT_SECONDARY, user.email.as_str());
                        ui.colored_label(styles::role_color(&user.role), user.role.as_str());
                        ui.end_row();
                    }
                });
        });
    });
}
