//! Theme Styling Functions
//!
//! Helpers applying the palette consistently across views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;
use crate::shared::permissions::{ROLE_MANAGEMENT, ROLE_OPERATIONS_LEAD};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();

    // Window styling
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::PAGE_BG;

    // Widget styling
    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.widgets.inactive.bg_fill = colors::BUTTON_SECONDARY;
    style.visuals.widgets.inactive.weak_bg_fill = colors::BUTTON_SECONDARY;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
    style.visuals.widgets.hovered.weak_bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    // Selection color
    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Page body
pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::same(16))
}

/// Stat tiles, receipt cards and list rows
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(2.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

pub fn toast_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOAST_BG)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(14, 10))
}

/// Filled button with light text
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_LIGHT))
        .fill(colors::BUTTON_PRIMARY)
        .corner_radius(CornerRadius::same(6))
}

pub fn danger_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_LIGHT))
        .fill(colors::DANGER)
        .corner_radius(CornerRadius::same(6))
}

/// Badge colour for a role label
pub fn role_color(role: &str) -> Color32 {
    match role {
        ROLE_MANAGEMENT => colors::ROLE_MANAGEMENT,
        ROLE_OPERATIONS_LEAD => colors::ROLE_OPERATIONS_LEAD,
        _ => colors::ROLE_OTHER,
    }
}
