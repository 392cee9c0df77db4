use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub mod auth_view;
pub mod confirm_dialog;
pub mod dashboard_view;
pub mod receipt_form;
pub mod receipts_view;
pub mod supplier_form;
pub mod suppliers_view;
pub mod users_view;

const NAV: [AppView; 4] = [
    AppView::Dashboard,
    AppView::Receipts,
    AppView::Suppliers,
    AppView::Users,
];

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let app = state.config.app();
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new(format!("🍲 {}", app.restaurant_name)).size(18.0).strong(),
                );
                ui.colored_label(colors::TEXT_SECONDARY, app.app_name.clone());

                if state.data.is_none() {
                    return;
                }

                ui.add_space(24.0);
                let current = state.current_view();
                for view in NAV {
                    let visible = match view {
                        AppView::Suppliers => state.can_view_suppliers(),
                        AppView::Users => state.can_manage_users(),
                        _ => true,
                    };
                    if visible
                        && ui
                            .selectable_label(
                                current == view,
                                egui::RichText::new(view.label()).color(colors::TEXT_LIGHT),
                            )
                            .clicked()
                    {
                        state.show(view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout").clicked() {
                        state.logout();
                        return;
                    }
                    if let Some(user) = state.session.user() {
                        egui::Frame::new()
                            .fill(styles::role_color(&user.role))
                            .corner_radius(egui::CornerRadius::same(10))
                            .inner_margin(egui::Margin::symmetric(8, 2))
                            .show(ui, |ui| {
                                ui.colored_label(egui::Color32::WHITE, user.role.as_str());
                            });
                        ui.colored_label(colors::TEXT_LIGHT, user.name.as_str());
                    }
                    if state.is_loading() {
                        ui.spinner();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| match state.current_view() {
            AppView::SignIn => auth_view::render(ui, state),
            AppView::Dashboard => dashboard_view::render(ui, state),
            AppView::Receipts => receipts_view::render(ui, state),
            AppView::Suppliers => suppliers_view::render(ui, state),
            AppView::Users => users_view::render(ui, state),
        });
}

/// Dialogs and toasts drawn above the current view
pub fn render_overlays(ctx: &egui::Context, state: &mut AppState) {
    if state.data.is_some() {
        receipts_view::render_detail(ctx, state);
        receipt_form::render(ctx, state);
        supplier_form::render(ctx, state);
        confirm_dialog::render(ctx, state);
    }
    render_toasts(ctx, state);
}

fn render_toasts(ctx: &egui::Context, state: &AppState) {
    if state.notifications.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notice in state.notifications.visible() {
                styles::toast_frame().show(ui, |ui| {
                    ui.colored_label(colors::TEXT_LIGHT, notice.text());
                });
                ui.add_space(6.0);
            }
        });
}

/// One frame of the application
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    state.poll_events(Instant::now());
    render_top_bar(ctx, state);
    render_main_panel(ctx, state);
    render_overlays(ctx, state);
}

/// Muted centered line used for empty lists
pub(crate) fn empty_state(ui: &mut egui::Ui, text: &str) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, text);
    });
    ui.add_space(12.0);
}
