//! Color constants for the board UI
//!
//! Warm brown/tan scheme: dark chrome around light columns and cards.

use eframe::egui::Color32;

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Column background - Dark brown
pub const COLUMN_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Column background while a card hovers over it
pub const COLUMN_DROP_TARGET: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Card background - Light tan
pub const CARD_BG: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Accent color for primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Priority badges
pub const PRIORITY_LOW: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const PRIORITY_MEDIUM: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);
pub const PRIORITY_HIGH: Color32 = Color32::from_rgb(0xE5, 0x39, 0x35);
