//! Color Constants
//!
//! Warm light palette: dark top bar, off-white page, white cards.

use eframe::egui::Color32;

/// Top bar background - Deep brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Page background - Off-white
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Card / dialog background
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border - Muted tan
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE2, 0xD5, 0xC6);

/// Input background - Light tan
pub const INPUT_BG: Color32 = Color32::from_rgb(0xF3, 0xEA, 0xDF);

/// Hovered row
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Accent for amounts and primary buttons - Jollof orange
pub const ACCENT: Color32 = Color32::from_rgb(0xD3, 0x5F, 0x1F);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0xD3, 0x5F, 0x1F);

/// Button secondary background
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Destructive actions
pub const DANGER: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);

pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Toast background
pub const TOAST_BG: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Role badges
pub const ROLE_MANAGEMENT: Color32 = Color32::from_rgb(0x7B, 0x1F, 0xA2);
pub const ROLE_OPERATIONS_LEAD: Color32 = Color32::from_rgb(0x19, 0x76, 0xD2);
pub const ROLE_OTHER: Color32 = Color32::from_rgb(0x38, 0x8E, 0x3C);
