use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::{empty_state, receipts_view};
use crate::shared::analytics::{self, SupplierStat};
use crate::shared::format::receipt_count_label;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(data) = state.data.as_ref() else {
        return;
    };
    let dashboard = analytics::dashboard(&data.receipts, &data.suppliers);
    let mut opened = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal(|ui| {
            stat_tile(ui, "Total Receipts", dashboard.receipt_count.to_string());
            stat_tile(ui, "Total Spending", dashboard.total_spending.to_string());
            stat_tile(ui, "Suppliers", dashboard.supplier_count.to_string());
        });
        ui.add_space(16.0);

        section_heading(ui, "🏆 Top Suppliers");
        if dashboard.top_suppliers.is_empty() {
            empty_state(ui, "No suppliers yet. Add your first receipt to get started!");
        } else {
            for (index, stat) in dashboard.top_suppliers.iter().enumerate() {
                ranked_row(ui, index + 1, stat);
            }
        }
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            section_heading(ui, "🕒 Recent Receipts");
            if state.can_add_receipt() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(styles::primary_button("+ Add Receipt")).clicked() {
                        opened = Some(None);
                    }
                });
            }
        });
        if let Some(id) = receipts_view::receipt_grid(ui, dashboard.recent_receipts.iter()) {
            opened = Some(Some(id));
        }
    });

    match opened {
        Some(Some(id)) => state.selected_receipt = Some(id),
        Some(None) => state.open_receipt_dialog(),
        None => {}
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(18.0)
            .strong()
            .color(colors::TEXT_PRIMARY),
    );
    ui.add_space(6.0);
}

fn stat_tile(ui: &mut egui::Ui, label: &str, value: String) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(180.0);
        ui.colored_label(colors::TEXT_SECONDARY, label);
        ui.label(
            egui::RichText::new(value)
                .size(26.0)
                .strong()
                .color(colors::ACCENT),
        );
    });
}

fn ranked_row(ui: &mut egui::Ui, rank: usize, stat: &SupplierStat) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(rank.to_string())
                    .size(20.0)
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(stat.name.as_str()).strong().color(colors::TEXT_PRIMARY));
                ui.colored_label(colors::TEXT_SECONDARY, stat.category.as_str());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(stat.total.to_string()).strong().color(colors::ACCENT));
                    ui.colored_label(colors::TEXT_SECONDARY, receipt_count_label(stat.count));
                });
            });
        });
    });
    ui.add_space(4.0);
}
