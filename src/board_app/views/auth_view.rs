use eframe::egui;

use crate::board_app::state::AppState;
use crate::board_app::theme::colors;

fn labeled_input(ui: &mut egui::Ui, offset: f32, label: &str, value: &mut String, password: bool) {
    let input_width = 280.0;
    let label_width = 80.0;

    ui.horizontal(|ui| {
        ui.add_space(offset);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(value)
                .password(password)
                .text_color(colors::TEXT_DARK),
        );
    });
    ui.add_space(8.0);
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let register = state.auth_form.is_register_mode;
            let total_height = if register { 330.0 } else { 280.0 };
            ui.add_space((available_rect.height() - total_height).max(0.0) / 2.0);

            ui.label(egui::RichText::new("📋 Task Board").size(32.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if register { "Create Account" } else { "Welcome Back" })
                    .size(24.0)
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let offset = ((available_rect.width() - 380.0) / 2.0).max(0.0);
            if register {
                labeled_input(ui, offset, "Username:", &mut state.auth_form.username, false);
            }
            labeled_input(ui, offset, "Email:", &mut state.auth_form.email, false);
            labeled_input(ui, offset, "Password:", &mut state.auth_form.password, true);

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 120.0;
                ui.add_space(((available_rect.width() - button_width * 2.0 - 10.0) / 2.0).max(0.0));

                let submit = egui::Button::new(
                    egui::RichText::new(if register { "Sign Up" } else { "Login" }).color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);
                if ui
                    .add_enabled_ui(!state.is_loading(), |ui| ui.add_sized([button_width, 32.0], submit))
                    .inner
                    .clicked()
                {
                    if register {
                        state.handle_register();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let toggle = egui::Button::new(
                    egui::RichText::new(if register { "Back to Login" } else { "Create Account" })
                        .color(colors::TEXT_SECONDARY),
                );
                if ui.add_sized([button_width, 32.0], toggle).clicked() {
                    state.auth_form.toggle_mode();
                    state.error = None;
                }
            });

            if state.is_loading() {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space(((available_rect.width() - 100.0) / 2.0).max(0.0));
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
