use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.supplier_dialog_open {
        return;
    }

    let mut submit = false;
    let mut cancel = false;
    let saving = state.saving_supplier;
    let form = &mut state.supplier_form;

    egui::Window::new("Add Supplier")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            for (label, value, hint) in [
                ("Supplier Name *", &mut form.name, ""),
                ("Category *", &mut form.category, "e.g. Produce, Meat, Spices"),
                ("Contact", &mut form.contact, "Phone or email (optional)"),
            ] {
                ui.colored_label(colors::TEXT_SECONDARY, label);
                ui.add(
                    egui::TextEdit::singleline(value)
                        .hint_text(hint)
                        .desired_width(300.0),
                );
                ui.add_space(8.0);
            }
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let label = if saving { "⏳ Saving..." } else { "Save Supplier" };
                if ui.add_enabled(!saving, styles::primary_button(label)).clicked() {
                    submit = true;
                }
                if ui.add_enabled(!saving, egui::Button::new("Cancel")).clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        state.submit_supplier(Instant::now());
    } else if cancel {
        state.close_supplier_dialog();
    }
}
