use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::search::suggest_suppliers;

const FIELD_WIDTH: f32 = 320.0;

/// Add-receipt dialog
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.receipt_dialog_open {
        return;
    }

    let mut submit = false;
    let mut cancel = false;
    let saving = state.saving_receipt;

    let AppState {
        receipt_form: form,
        data,
        show_suggestions,
        ..
    } = state;
    let suppliers = data.as_ref().map(|d| d.suppliers.as_slice()).unwrap_or(&[]);

    egui::Window::new("Add Receipt")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Supplier *");
            let supplier_field = ui.add(
                egui::TextEdit::singleline(&mut form.supplier)
                    .hint_text("Start typing a supplier name")
                    .desired_width(FIELD_WIDTH),
            );
            if supplier_field.gained_focus() || supplier_field.changed() {
                *show_suggestions = true;
            }
            if supplier_field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                *show_suggestions = false;
            }

            if *show_suggestions {
                let suggestions = suggest_suppliers(suppliers, &form.supplier);
                let mut picked = None;
                let list = styles::card_frame().show(ui, |ui| {
                    ui.set_width(FIELD_WIDTH);
                    egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                        for supplier in &suggestions.items {
                            let label = format!("{}  ·  {}", supplier.name, supplier.category);
                            if ui.selectable_label(false, label).clicked() {
                                picked = Some(supplier.name.clone());
                            }
                        }
                        if let Some(hint) = suggestions.hint {
                            ui.colored_label(colors::TEXT_SECONDARY, hint);
                        }
                    });
                });

                if let Some(name) = picked {
                    form.supplier = name;
                    *show_suggestions = false;
                } else if ui.input(|i| i.pointer.any_click())
                    && !supplier_field.hovered()
                    && !list.response.hovered()
                {
                    *show_suggestions = false;
                }
            }
            ui.add_space(8.0);

            ui.colored_label(colors::TEXT_SECONDARY, "Receipt Number *");
            ui.add(egui::TextEdit::singleline(&mut form.receipt_number).desired_width(FIELD_WIDTH));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Amount *");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.amount)
                            .hint_text("0.00")
                            .desired_width(FIELD_WIDTH / 2.0 - 8.0),
                    );
                });
                ui.vertical(|ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Date *");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(FIELD_WIDTH / 2.0 - 8.0),
                    );
                });
            });
            ui.add_space(8.0);

            ui.colored_label(colors::TEXT_SECONDARY, "Notes");
            ui.add(
                egui::TextEdit::multiline(&mut form.notes)
                    .desired_rows(2)
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(8.0);

            ui.colored_label(colors::TEXT_SECONDARY, "Receipt Image");
            ui.add(
                egui::TextEdit::singleline(&mut form.image_path)
                    .hint_text("Path to a photo or scan (optional)")
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(14.0);

            ui.horizontal(|ui| {
                let label = if saving { "⏳ Saving..." } else { "Save Receipt" };
                if ui.add_enabled(!saving, styles::primary_button(label)).clicked() {
                    submit = true;
                }
                if ui.add_enabled(!saving, egui::Button::new("Cancel")).clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        state.submit_receipt(Instant::now());
    } else if cancel {
        state.close_receipt_dialog();
    }
}
