use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::empty_state;
use crate::shared::format::format_date;
use crate::shared::records::Receipt;
use crate::shared::search::filter_receipts;

const CARD_WIDTH: f32 = 220.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut add_clicked = false;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.receipt_search)
                .hint_text("🔍 Search receipts...")
                .desired_width(320.0),
        );
        if state.can_add_receipt() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                add_clicked = ui.add(styles::primary_button("+ Add Receipt")).clicked();
            });
        }
    });
    ui.add_space(12.0);

    let Some(data) = state.data.as_ref() else {
        return;
    };
    let visible = filter_receipts(&data.receipts, &state.receipt_search);
    let opened = egui::ScrollArea::vertical()
        .show(ui, |ui| receipt_grid(ui, visible))
        .inner;

    if let Some(id) = opened {
        state.selected_receipt = Some(id);
    }
    if add_clicked {
        state.open_receipt_dialog();
    }
}

/// Card grid; returns the id of a clicked card
pub fn receipt_grid<'a>(
    ui: &mut egui::Ui,
    receipts: impl IntoIterator<Item = &'a Receipt>,
) -> Option<String> {
    let receipts: Vec<&Receipt> = receipts.into_iter().collect();
    if receipts.is_empty() {
        empty_state(ui, "No receipts found.");
        return None;
    }

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for receipt in receipts {
            let response = styles::card_frame()
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.label(egui::RichText::new(if receipt.image.is_some() { "🖼" } else { "🧾" }).size(28.0));
                    ui.label(
                        egui::RichText::new(receipt.supplier.as_str())
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!("Receipt #{}", receipt.receipt_number),
                    );
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(receipt.amount.to_string())
                                .strong()
                                .color(colors::ACCENT),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.colored_label(colors::TEXT_SECONDARY, format_date(receipt.date));
                        });
                    });
                })
                .response
                .interact(egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            if response.clicked() {
                clicked = Some(receipt.id.clone());
            }
        }
    });
    clicked
}

/// Receipt detail dialog for `state.selected_receipt`
pub fn render_detail(ctx: &egui::Context, state: &mut AppState) {
    let Some(id) = state.selected_receipt.clone() else {
        return;
    };
    let Some(receipt) = state
        .data
        .as_ref()
        .and_then(|data| data.receipts.iter().find(|r| r.id == id))
        .cloned()
    else {
        state.selected_receipt = None;
        return;
    };

    let can_delete = state.can_delete_receipt();
    let mut close = false;
    let mut delete = false;

    egui::Window::new("Receipt Details")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.set_min_width(360.0);
            match receipt.image.as_deref() {
                Some(url) if url.starts_with("http") => {
                    ui.hyperlink_to("🖼 Open receipt image", url);
                }
                Some(_) => {
                    ui.colored_label(colors::TEXT_SECONDARY, "🖼 Image attached");
                }
                None => {
                    ui.label(egui::RichText::new("🧾").size(40.0));
                }
            }
            ui.add_space(8.0);

            egui::Grid::new("receipt_detail").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "Supplier");
                ui.label(receipt.supplier.as_str());
                ui.end_row();
                ui.colored_label(colors::TEXT_SECONDARY, "Receipt #");
                ui.label(receipt.receipt_number.as_str());
                ui.end_row();
                ui.colored_label(colors::TEXT_SECONDARY, "Amount");
                ui.label(egui::RichText::new(receipt.amount.to_string()).strong().color(colors::ACCENT));
                ui.end_row();
                ui.colored_label(colors::TEXT_SECONDARY, "Date");
                ui.label(format_date(receipt.date));
                ui.end_row();
                if let Some(notes) = receipt.notes.as_deref() {
                    ui.colored_label(colors::TEXT_SECONDARY, "Notes");
                    ui.label(notes);
                    ui.end_row();
                }
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if can_delete && ui.add(styles::danger_button("🗑️ Delete")).clicked() {
                    delete = true;
                }
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        });

    if delete {
        state.request_delete_receipt(&receipt.id);
    }
    if close {
        state.selected_receipt = None;
    }
}
