//! Database operations for tasks
//!
//! Every read joins the assignee so callers receive a populated
//! `assignedTo`. Priority and status are stored as their display strings.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{AssigneeRef, CreateTaskRequest, Task, UpdateTaskRequest};

const SELECT_TASKS: &str = r#"
    SELECT t.id, t.title, t.description, t.due_date, t.priority, t.status,
           t.assigned_to, t.created_by, t.created_at, t.updated_at,
           u.username AS assignee_username
    FROM tasks t
    LEFT JOIN users u ON u.id = t.assigned_to
"#;

/// A `tasks` row joined with the assignee's username
#[derive(Debug, Clone, sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: String,
    status: String,
    assigned_to: Option<Uuid>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    assignee_username: Option<String>,
}

impl TaskRow {
    fn into_task(self) -> Result<Task, sqlx::Error> {
        let priority = self.priority.parse().map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let status = self.status.parse().map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let assigned_to = self
            .assigned_to
            .zip(self.assignee_username)
            .map(|(id, username)| AssigneeRef { id, username });

        Ok(Task {
            id: self.id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority,
            status,
            assigned_to,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    /// Overwrite the fields present in `patch`
    fn apply(&mut self, patch: UpdateTaskRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority.as_str().to_string();
        }
        if let Some(status) = patch.status {
            self.status = status.as_str().to_string();
        }
        if let Some(assigned_to) = patch.assigned_to {
            self.assigned_to = assigned_to;
        }
    }
}

/// Insert a task and return it with the assignee populated
pub async fn insert_task(
    pool: &SqlitePool,
    request: &CreateTaskRequest,
    created_by: Uuid,
) -> Result<Task, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO tasks (id, title, description, due_date, priority, status,
                           assigned_to, created_by, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&request.title)
    .bind(&request.description)
    .bind(request.due_date)
    .bind(request.priority.as_str())
    .bind(request.status.as_str())
    .bind(request.assigned_to)
    .bind(created_by)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_task(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// List every task, newest first
pub async fn list_tasks(pool: &SqlitePool) -> Result<Vec<Task>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TaskRow>(&format!(
        "{} ORDER BY t.created_at DESC, t.rowid DESC",
        SELECT_TASKS
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(TaskRow::into_task).collect()
}

/// Get a task by ID
pub async fn get_task(pool: &SqlitePool, id: Uuid) -> Result<Option<Task>, sqlx::Error> {
    let row = sqlx::query_as::<_, TaskRow>(&format!("{} WHERE t.id = ?", SELECT_TASKS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(TaskRow::into_task).transpose()
}

/// Apply a partial update
///
/// Returns `None` when no task has this id. The read and the write run in
/// one transaction; concurrent updates are last-write-wins.
pub async fn update_task(
    pool: &SqlitePool,
    id: Uuid,
    patch: UpdateTaskRequest,
) -> Result<Option<Task>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, TaskRow>(&format!("{} WHERE t.id = ?", SELECT_TASKS))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    let Some(mut row) = row else {
        return Ok(None);
    };
    row.apply(patch);

    sqlx::query(
        r#"
        UPDATE tasks
        SET title = ?, description = ?, due_date = ?, priority = ?, status = ?,
            assigned_to = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&row.title)
    .bind(&row.description)
    .bind(row.due_date)
    .bind(&row.priority)
    .bind(&row.status)
    .bind(row.assigned_to)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    get_task(pool, id).await
}

/// Delete a task; returns whether a row was removed
pub async fn delete_task(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
