//! Form buffers
//!
//! egui text edits need owned `String`s; these structs hold the raw input
//! and turn it into request bodies when submitted.

use uuid::Uuid;

use crate::shared::task::parse_due_date;
use crate::shared::{CreateTaskRequest, LoginRequest, Priority, RegisterRequest, SharedError, TaskStatus};

/// Login and registration inputs
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_register_mode: bool,
}

impl AuthForm {
    pub fn login_request(&self) -> Result<LoginRequest, String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Email and password are required".to_string());
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn register_request(&self) -> Result<RegisterRequest, String> {
        if self.username.trim().is_empty() {
            return Err("Username is required".to_string());
        }
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Email and password are required".to_string());
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address".to_string());
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn toggle_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.password.clear();
    }

    pub fn clear_secrets(&mut self) {
        self.password.clear();
    }
}

/// New task inputs
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` or empty
    pub due_date: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: Option<Uuid>,
}

impl TaskForm {
    pub fn to_request(&self) -> Result<CreateTaskRequest, SharedError> {
        let description = self.description.trim();
        CreateTaskRequest {
            title: self.title.clone(),
            description: (!description.is_empty()).then(|| description.to_string()),
            due_date: parse_due_date(&self.due_date)?,
            priority: self.priority,
            status: self.status,
            assigned_to: self.assigned_to,
        }
        .validate()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
