//! Task fixtures that need no server

use chrono::Utc;
use taskboard::shared::{AssigneeRef, Priority, Task, TaskStatus};
use uuid::Uuid;

/// A task as the API would return it
pub fn sample_task(title: &str, status: TaskStatus) -> Task {
    let now = Utc::now();
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        due_date: None,
        priority: Priority::default(),
        status,
        assigned_to: None,
        created_by: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn assigned(mut task: Task, username: &str) -> Task {
    task.assigned_to = Some(AssigneeRef {
        id: Uuid::new_v4(),
        username: username.to_string(),
    });
    task
}
