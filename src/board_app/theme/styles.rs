//! Theme Styling Functions

use eframe::egui::{self, Color32, Stroke};

use super::colors;
use crate::shared::Priority;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.window_fill = colors::COLUMN_BG;
    style.visuals.override_text_color = Some(colors::TEXT_LIGHT);

    style.visuals.widgets.inactive.bg_fill = colors::ACCENT;
    style.visuals.widgets.inactive.weak_bg_fill = colors::ACCENT;
    style.visuals.widgets.hovered.bg_fill = colors::COLUMN_DROP_TARGET;
    style.visuals.widgets.hovered.weak_bg_fill = colors::COLUMN_DROP_TARGET;
    style.visuals.extreme_bg_color = colors::TOP_BAR_BG;

    style.visuals.selection.bg_fill = colors::COLUMN_DROP_TARGET;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame around one board column
pub fn column_frame(is_drop_target: bool) -> egui::Frame {
    let fill = if is_drop_target {
        colors::COLUMN_DROP_TARGET
    } else {
        colors::COLUMN_BG
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(8))
}

/// Frame around one task card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(8))
}

pub fn priority_color(priority: Priority) -> Color32 {
    match priority {
        Priority::Low => colors::PRIORITY_LOW,
        Priority::Medium => colors::PRIORITY_MEDIUM,
        Priority::High => colors::PRIORITY_HIGH,
    }
}
