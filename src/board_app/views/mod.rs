use eframe::egui;

use crate::board_app::state::AppState;
use crate::board_app::theme::colors;

pub mod auth_view;
pub mod board_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("📋 Task Board").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    let signed_in = state.session.as_ref().map(|s| s.user.username.clone());
                    if let Some(username) = signed_in {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        ui.colored_label(colors::TEXT_LIGHT, format!("@{}", username));
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        if state.is_authenticated() {
            board_view::render(ui, state);
        } else {
            auth_view::render(ui, state);
        }
    });
}
