//! Theme Module
//!
//! Color scheme and styling helpers for the receipt manager:
//!
//! - Color constants for the warm light palette
//! - Frame builders for cards, dialogs and toasts
//! - Role badge colours
//!
//! # Usage
//!
//! ```rust,no_run
//! use receipt_manager::egui_app::theme::styles;
//!
//! # fn setup(ctx: &eframe::egui::Context) {
//! styles::apply_global_theme(ctx);
//! # }
//! ```

pub mod colors;
pub mod styles;
