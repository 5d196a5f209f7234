/**
 * Board Model
 *
 * The board is the fetched task list partitioned into the three status
 * columns. It is never edited locally: drag-and-drop produces a
 * [`StatusChange`] that is sent to the server, and the board is replaced
 * wholesale by the next fetch.
 */

use uuid::Uuid;

use crate::shared::{Task, TaskStatus, UpdateTaskRequest};

/// A status change requested by dropping a card on another column
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub task_id: Uuid,
    pub from: TaskStatus,
    pub to: TaskStatus,
    /// Full update payload: the task as fetched with only `status` replaced
    pub payload: UpdateTaskRequest,
}

/// Tasks grouped by status column, each column in fetch order
#[derive(Debug, Clone, Default)]
pub struct Board {
    columns: [Vec<Task>; 3],
}

impl Board {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut board = Self::default();
        board.replace(tasks);
        board
    }

    /// Replace the board contents with a fresh fetch
    pub fn replace(&mut self, tasks: Vec<Task>) {
        for column in &mut self.columns {
            column.clear();
        }
        for task in tasks {
            self.columns[task.status.column()].push(task);
        }
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        &self.columns[status.column()]
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, task_id: Uuid) -> Option<&Task> {
        self.columns.iter().flatten().find(|task| task.id == task_id)
    }

    /// Work out what a drop of `task_id` onto the `to` column means
    ///
    /// Returns `None` for a drop into the card's own column or for an id
    /// that is not on the board; neither sends a request.
    pub fn plan_drop(&self, task_id: Uuid, to: TaskStatus) -> Option<StatusChange> {
        let task = self.find(task_id)?;
        if task.status == to {
            return None;
        }

        Some(StatusChange {
            task_id,
            from: task.status,
            to,
            payload: UpdateTaskRequest::from_task(task).with_status(to),
        })
    }
}
