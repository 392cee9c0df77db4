use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::empty_state;
use crate::shared::analytics::receipt_counts;
use crate::shared::format::receipt_count_label;
use crate::shared::search::filter_suppliers;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let can_manage = state.can_manage_suppliers();
    let mut add_clicked = false;

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.supplier_search)
                .hint_text("🔍 Search suppliers...")
                .desired_width(320.0),
        );
        if can_manage {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                add_clicked = ui.add(styles::primary_button("+ Add Supplier")).clicked();
            });
        }
    });
    ui.add_space(12.0);

    let Some(data) = state.data.as_ref() else {
        return;
    };
    let counts = receipt_counts(&data.receipts);
    let visible = filter_suppliers(&data.suppliers, &state.supplier_search);
    let mut delete_id = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        if visible.is_empty() {
            empty_state(ui, "No suppliers found.");
            return;
        }
        for supplier in visible {
            styles::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(supplier.name.as_str())
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.colored_label(colors::TEXT_SECONDARY, supplier.category.as_str());
                        if let Some(contact) = supplier.contact.as_deref() {
                            ui.colored_label(colors::TEXT_SECONDARY, format!("📞 {}", contact));
                        }
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if can_manage
                            && ui
                                .button("🗑️")
                                .on_hover_text("Delete supplier")
                                .clicked()
                        {
                            delete_id = Some(supplier.id.clone());
                        }
                        let count = counts.get(supplier.name.as_str()).copied().unwrap_or(0);
                        ui.colored_label(colors::TEXT_SECONDARY, receipt_count_label(count));
                    });
                });
            });
            ui.add_space(4.0);
        }
    });

    if let Some(id) = delete_id {
        state.request_delete_supplier(&id);
    }
    if add_clicked {
        state.open_supplier_dialog();
    }
}
