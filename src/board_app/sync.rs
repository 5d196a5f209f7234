//! Board synchronization
//!
//! Every mutation is one request followed by a full re-fetch. The returned
//! task list is what the board shows next; nothing is applied locally
//! before the server confirms it.

use uuid::Uuid;

use crate::board_app::api::{ApiClient, ApiError};
use crate::board_app::board::StatusChange;
use crate::board_app::session::Session;
use crate::shared::{CreateTaskRequest, Task};

#[derive(Debug, Clone)]
pub struct BoardSync {
    api: ApiClient,
}

impl BoardSync {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetch the current task list
    pub async fn refresh(&self, session: &Session) -> Result<Vec<Task>, ApiError> {
        self.api.list_tasks(session).await
    }

    /// Send a planned status change, then re-fetch
    pub async fn move_task(
        &self,
        session: &Session,
        change: &StatusChange,
    ) -> Result<Vec<Task>, ApiError> {
        tracing::info!("Moving task {} from {} to {}", change.task_id, change.from, change.to);
        self.api.update_task(session, change.task_id, &change.payload).await?;
        self.refresh(session).await
    }

    pub async fn create_task(
        &self,
        session: &Session,
        request: &CreateTaskRequest,
    ) -> Result<Vec<Task>, ApiError> {
        let task = self.api.create_task(session, request).await?;
        tracing::info!("Created task {}", task.id);
        self.refresh(session).await
    }

    pub async fn delete_task(&self, session: &Session, id: Uuid) -> Result<Vec<Task>, ApiError> {
        self.api.delete_task(session, id).await?;
        tracing::info!("Deleted task {}", id);
        self.refresh(session).await
    }
}
