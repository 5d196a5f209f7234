//! Kanban board view
//!
//! Three columns, one per status. Cards are drag sources carrying the task
//! id; columns are drop zones. Rendering only collects [`BoardAction`]s,
//! which are applied to the state after the frame's widgets are laid out.

use eframe::egui;
use uuid::Uuid;

use crate::board_app::board::Board;
use crate::board_app::state::AppState;
use crate::board_app::theme::{colors, styles};
use crate::shared::{Priority, Task, TaskStatus, UserResponse};

/// User intent captured while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoardAction {
    Drop(Uuid, TaskStatus),
    Delete(Uuid),
    Create,
    Refresh,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut actions = Vec::new();

    egui::Frame::new()
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            if let Some(ref error) = state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(6.0);
            }

            egui::CollapsingHeader::new(egui::RichText::new("➕ New task").color(colors::TEXT_LIGHT))
                .default_open(false)
                .show(ui, |ui| {
                    if render_task_form(ui, state) {
                        actions.push(BoardAction::Create);
                    }
                });

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} tasks", state.board.len()))
                        .color(colors::TEXT_SECONDARY),
                );
                if ui.button("🔄 Refresh").clicked() {
                    actions.push(BoardAction::Refresh);
                }
                if state.is_loading() {
                    ui.spinner();
                }
            });
            ui.add_space(8.0);

            let dragging = egui::DragAndDrop::has_payload_of_type::<Uuid>(ui.ctx());
            ui.columns(TaskStatus::ALL.len(), |columns| {
                for (ui, status) in columns.iter_mut().zip(TaskStatus::ALL) {
                    render_column(ui, &state.board, status, dragging, &mut actions);
                }
            });
        });

    for action in actions {
        match action {
            BoardAction::Drop(task_id, to) => state.handle_drop(task_id, to),
            BoardAction::Delete(task_id) => state.handle_delete(task_id),
            BoardAction::Create => state.handle_create(),
            BoardAction::Refresh => state.refresh(),
        }
    }
}

fn render_column(
    ui: &mut egui::Ui,
    board: &Board,
    status: TaskStatus,
    dragging: bool,
    actions: &mut Vec<BoardAction>,
) {
    let tasks = board.column(status);

    let (_, dropped) = ui.dnd_drop_zone::<Uuid, ()>(styles::column_frame(dragging), |ui| {
        ui.set_min_height(400.0);
        ui.label(
            egui::RichText::new(format!("{} ({})", status, tasks.len()))
                .size(18.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.separator();

        for task in tasks {
            render_card(ui, task, actions);
            ui.add_space(6.0);
        }
    });

    if let Some(task_id) = dropped {
        actions.push(BoardAction::Drop(*task_id, status));
    }
}

fn render_card(ui: &mut egui::Ui, task: &Task, actions: &mut Vec<BoardAction>) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.dnd_drag_source(egui::Id::new(("task_card", task.id)), task.id, |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&task.title).strong().color(colors::TEXT_DARK));
                    if let Some(ref description) = task.description {
                        ui.label(egui::RichText::new(description).small().color(colors::TEXT_SECONDARY));
                    }
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("● {}", task.priority))
                                .small()
                                .color(styles::priority_color(task.priority)),
                        );
                        if let Some(due) = task.due_date {
                            ui.label(egui::RichText::new(format!("Due {}", due)).small().color(colors::TEXT_DARK));
                        }
                        if let Some(ref assignee) = task.assigned_to {
                            ui.label(
                                egui::RichText::new(format!("@{}", assignee.username))
                                    .small()
                                    .color(colors::TEXT_DARK),
                            );
                        }
                    });
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.small_button("🗑").on_hover_text("Delete task").clicked() {
                    actions.push(BoardAction::Delete(task.id));
                }
            });
        });
    });
}

/// Returns `true` when the form was submitted
fn render_task_form(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let form = &mut state.task_form;
    let users: &[UserResponse] = &state.users;

    egui::Grid::new("new_task_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Title");
            ui.text_edit_singleline(&mut form.title);
            ui.end_row();

            ui.label("Description");
            ui.text_edit_multiline(&mut form.description);
            ui.end_row();

            ui.label("Due date");
            ui.add(egui::TextEdit::singleline(&mut form.due_date).hint_text("YYYY-MM-DD"));
            ui.end_row();

            ui.label("Priority");
            egui::ComboBox::from_id_salt("new_task_priority")
                .selected_text(form.priority.as_str())
                .show_ui(ui, |ui| {
                    for priority in Priority::ALL {
                        ui.selectable_value(&mut form.priority, priority, priority.as_str());
                    }
                });
            ui.end_row();

            ui.label("Status");
            egui::ComboBox::from_id_salt("new_task_status")
                .selected_text(form.status.as_str())
                .show_ui(ui, |ui| {
                    for status in TaskStatus::ALL {
                        ui.selectable_value(&mut form.status, status, status.as_str());
                    }
                });
            ui.end_row();

            ui.label("Assignee");
            let selected = form
                .assigned_to
                .and_then(|id| users.iter().find(|u| u.id == id))
                .map(|u| u.username.clone())
                .unwrap_or_else(|| "Unassigned".to_string());
            egui::ComboBox::from_id_salt("new_task_assignee")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.assigned_to, None, "Unassigned");
                    for user in users {
                        ui.selectable_value(&mut form.assigned_to, Some(user.id), user.username.as_str());
                    }
                });
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.button("Create task").clicked()
}
