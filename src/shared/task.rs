//! Task data structures
//!
//! Defines the task record as it travels over the wire, together with the
//! request bodies used to create and update tasks. Field names follow the
//! API's JSON contract (`_id`, `dueDate`, `assignedTo`, ...).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SharedError::unknown_variant("priority", s))
    }
}

/// Task status; each variant is one column of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    /// Board column order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Position of this status in [`TaskStatus::ALL`]
    pub fn column(&self) -> usize {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| SharedError::unknown_variant("status", s))
    }
}

/// Public fields of the user a task is assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

/// A task as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    /// Populated assignee, `None` when unassigned
    #[serde(default)]
    pub assigned_to: Option<AssigneeRef>,
    #[serde(default)]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/tasks/create-task`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "due_date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "assignee", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Uuid>,
}

impl CreateTaskRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Check required fields and trim the title.
    pub fn validate(mut self) -> Result<Self, SharedError> {
        self.title = required_title(&self.title)?;
        Ok(self)
    }
}

/// Body of `PUT /api/tasks/update-task/:id`
///
/// Every field is optional; absent fields keep their stored value. The
/// nullable fields use `Option<Option<_>>` so that an explicit `null` clears
/// the value while an absent key leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "patch_description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_due_date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "patch_assignee", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Option<Uuid>>,
}

impl UpdateTaskRequest {
    /// Full replacement payload carrying every mutable field of `task`.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            due_date: Some(task.due_date),
            priority: Some(task.priority),
            status: Some(task.status),
            assigned_to: Some(task.assigned_to.as_ref().map(|a| a.id)),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Reject a blank title if one was supplied and trim it otherwise.
    pub fn validate(mut self) -> Result<Self, SharedError> {
        if let Some(title) = self.title.take() {
            self.title = Some(required_title(&title)?);
        }
        Ok(self)
    }
}

fn required_title(title: &str) -> Result<String, SharedError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(SharedError::validation("title", "Title is required"));
    }
    Ok(title.to_string())
}

/// Parse a due date. Accepts `YYYY-MM-DD` and full timestamps that start with
/// one; an empty string means "no due date".
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, SharedError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| SharedError::validation("dueDate", format!("Invalid due date: '{}'", raw)))
}

/// Parse an assignee id. An empty string means "unassigned".
pub fn parse_assignee_id(raw: &str) -> Result<Option<Uuid>, SharedError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Uuid::parse_str(raw)
        .map(Some)
        .map_err(|_| SharedError::validation("assignedTo", format!("Invalid user id: '{}'", raw)))
}

/// `assignedTo` may be sent as a bare id or echoed back as a populated object.
#[derive(Deserialize)]
#[serde(untagged)]
enum AssigneeInput {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: Uuid,
    },
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_due_date(&raw).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn assignee<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AssigneeInput>::deserialize(deserializer)? {
        Some(AssigneeInput::Id(raw)) => parse_assignee_id(&raw).map_err(serde::de::Error::custom),
        Some(AssigneeInput::Populated { id }) => Ok(Some(id)),
        None => Ok(None),
    }
}

fn patch_description<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    blank_as_none(deserializer).map(Some)
}

fn patch_due_date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    due_date(deserializer).map(Some)
}

fn patch_assignee<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: Deserializer<'de>,
{
    assignee(deserializer).map(Some)
}
