//! REST API Client
//!
//! Async `reqwest` wrappers for every endpoint the board uses. Calls that
//! need authentication take the current [`Session`].

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::board_app::config::Config;
use crate::board_app::session::Session;
use crate::shared::{
    AuthResponse, CreateTaskRequest, LoginRequest, MessageResponse, RegisterRequest, Task,
    UpdateTaskRequest, UserResponse,
};

/// Client-side API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("{message} ({status})")]
    Server { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Whether the session was rejected and the user has to log in again
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Server { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
        }
    }

    /// Message suitable for showing on screen
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(_) => "Could not reach the server".to_string(),
        }
    }
}

/// Error body returned by the server
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turn a non-success response into [`ApiError::Server`]
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            if text.is_empty() {
                status.to_string()
            } else {
                text
            }
        });
    Err(ApiError::Server { status, message })
}

/// HTTP client for the task board API
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn authed(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.header(reqwest::header::AUTHORIZATION, session.bearer())
    }

    /// Create an account; the response opens a session
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let url = self.config.api_url("/api/users/register");
        let response = self.client.post(&url).json(request).send().await?;
        decode::<AuthResponse>(response).await.map(Session::from)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let url = self.config.api_url("/api/users/login");
        let response = self.client.post(&url).json(request).send().await?;
        decode::<AuthResponse>(response).await.map(Session::from)
    }

    pub async fn list_users(&self, session: &Session) -> Result<Vec<UserResponse>, ApiError> {
        let url = self.config.api_url("/api/users");
        let response = self.authed(self.client.get(&url), session).send().await?;
        decode(response).await
    }

    pub async fn list_tasks(&self, session: &Session) -> Result<Vec<Task>, ApiError> {
        let url = self.config.api_url("/api/tasks");
        let response = self.authed(self.client.get(&url), session).send().await?;
        decode(response).await
    }

    pub async fn get_task(&self, session: &Session, id: Uuid) -> Result<Task, ApiError> {
        let url = self.config.api_url(&format!("/api/tasks/get-task/{}", id));
        let response = self.authed(self.client.get(&url), session).send().await?;
        decode(response).await
    }

    pub async fn create_task(
        &self,
        session: &Session,
        request: &CreateTaskRequest,
    ) -> Result<Task, ApiError> {
        let url = self.config.api_url("/api/tasks/create-task");
        let response = self
            .authed(self.client.post(&url), session)
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_task(
        &self,
        session: &Session,
        id: Uuid,
        request: &UpdateTaskRequest,
    ) -> Result<Task, ApiError> {
        let url = self.config.api_url(&format!("/api/tasks/update-task/{}", id));
        let response = self
            .authed(self.client.put(&url), session)
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_task(&self, session: &Session, id: Uuid) -> Result<MessageResponse, ApiError> {
        let url = self.config.api_url(&format!("/api/tasks/delete-task/{}", id));
        let response = self.authed(self.client.delete(&url), session).send().await?;
        decode(response).await
    }
}
