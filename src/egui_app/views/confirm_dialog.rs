use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Yes/no dialog for the pending delete, one prompt at a time
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(prompt) = state.pending_delete.as_ref().map(|c| c.prompt().to_string()) else {
        return;
    };

    let mut accepted = false;
    let mut declined = false;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(380.0);
            ui.label(egui::RichText::new(prompt).color(colors::TEXT_PRIMARY));
            ui.add_space(14.0);
            ui.horizontal(|ui| {
                if ui.add(styles::danger_button("Delete")).clicked() {
                    accepted = true;
                }
                if ui.button("Cancel").clicked() {
                    declined = true;
                }
            });
        });

    if accepted {
        state.confirm_delete();
    } else if declined {
        state.cancel_delete();
    }
}
