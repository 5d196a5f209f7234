//! Application state
//!
//! The UI thread owns [`AppState`]. Network calls run on a shared Tokio
//! runtime and report back through an `mpsc` channel that is drained once
//! per frame, so rendering never waits on the server.

pub mod forms;

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::board_app::api::{ApiClient, ApiError};
use crate::board_app::board::Board;
use crate::board_app::config::Config;
use crate::board_app::session::Session;
use crate::board_app::sync::BoardSync;
use crate::shared::{Task, TaskStatus, UserResponse};

pub use forms::{AuthForm, TaskForm};

/// Board requests that end in a task list re-fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardRequest {
    Load,
    Move,
    Create,
    Delete,
}

impl BoardRequest {
    fn describe(self) -> &'static str {
        match self {
            BoardRequest::Load => "load tasks",
            BoardRequest::Move => "update task",
            BoardRequest::Create => "create task",
            BoardRequest::Delete => "delete task",
        }
    }
}

/// Results delivered from background requests
///
/// Session-bound results carry the token they were issued with; results
/// for a session that has since ended are dropped.
#[derive(Debug)]
pub enum AppEvent {
    Authenticated(Result<Session, ApiError>),
    /// A fresh task list, or the failure of `request`
    BoardLoaded {
        token: String,
        request: BoardRequest,
        result: Result<Vec<Task>, ApiError>,
    },
    UsersLoaded {
        token: String,
        result: Result<Vec<UserResponse>, ApiError>,
    },
}

/// Central application state shared across egui views.
pub struct AppState {
    pub session: Option<Session>,
    pub board: Board,
    pub users: Vec<UserResponse>,
    pub auth_form: AuthForm,
    pub task_form: TaskForm,
    /// Message shown on the auth screen or above the board
    pub error: Option<String>,
    /// Requests still in flight
    pub pending: usize,
    sync: BoardSync,
    runtime: Arc<Runtime>,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
}

impl AppState {
    pub fn new(config: Config) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = channel();
        tracing::info!("Board client using server {}", config.server_url());

        Ok(Self {
            session: None,
            board: Board::default(),
            users: Vec::new(),
            auth_form: AuthForm::default(),
            task_form: TaskForm::default(),
            error: None,
            pending: 0,
            sync: BoardSync::new(ApiClient::new(config)),
            runtime: Arc::new(runtime),
            events_tx,
            events_rx,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = AppEvent> + Send + 'static,
    {
        self.pending += 1;
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(task.await);
        });
    }

    /// Apply every finished request. Called once per frame.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            self.apply(event);
        }
    }

    fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Authenticated(Ok(session)) => {
                tracing::info!("Signed in as {}", session.user.username);
                self.session = Some(session);
                self.auth_form.clear_secrets();
                self.error = None;
                self.refresh();
                self.load_users();
            }
            AppEvent::Authenticated(Err(e)) => {
                tracing::error!("Authentication failed: {}", e);
                self.error = Some(e.user_message());
            }
            AppEvent::BoardLoaded { token, request, result } => {
                if !self.is_current(&token) {
                    tracing::debug!("Dropping result of {} from an ended session", request.describe());
                    return;
                }
                match result {
                    Ok(tasks) => {
                        if request == BoardRequest::Create {
                            self.task_form.reset();
                        }
                        self.board.replace(tasks);
                    }
                    Err(e) => self.request_failed(request.describe(), e),
                }
            }
            AppEvent::UsersLoaded { token, result } => {
                if !self.is_current(&token) {
                    return;
                }
                match result {
                    Ok(users) => self.users = users,
                    Err(e) => self.request_failed("load users", e),
                }
            }
        }
    }

    fn is_current(&self, token: &str) -> bool {
        self.session.as_ref().is_some_and(|session| session.token == token)
    }

    /// Log a failed call; an auth failure also ends the session on screen.
    /// The board and the new-task form keep whatever they held before.
    fn request_failed(&mut self, action: &str, error: ApiError) {
        tracing::error!("Failed to {}: {}", action, error);
        if error.is_auth() {
            self.logout();
            self.error = Some(format!("{}. Please log in again.", error.user_message()));
        }
    }

    pub fn handle_login(&mut self) {
        let request = match self.auth_form.login_request() {
            Ok(request) => request,
            Err(message) => {
                self.error = Some(message);
                return;
            }
        };
        self.error = None;

        let sync = self.sync.clone();
        self.spawn(async move { AppEvent::Authenticated(sync.api().login(&request).await) });
    }

    pub fn handle_register(&mut self) {
        let request = match self.auth_form.register_request() {
            Ok(request) => request,
            Err(message) => {
                self.error = Some(message);
                return;
            }
        };
        self.error = None;

        let sync = self.sync.clone();
        self.spawn(async move { AppEvent::Authenticated(sync.api().register(&request).await) });
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("Signed out {}", session.user.username);
        }
        self.board = Board::default();
        self.users.clear();
        self.task_form.reset();
        self.auth_form.clear_secrets();
        self.error = None;
    }

    pub fn refresh(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let sync = self.sync.clone();
        self.spawn(async move {
            AppEvent::BoardLoaded {
                request: BoardRequest::Load,
                result: sync.refresh(&session).await,
                token: session.token,
            }
        });
    }

    fn load_users(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let sync = self.sync.clone();
        self.spawn(async move {
            AppEvent::UsersLoaded {
                result: sync.api().list_users(&session).await,
                token: session.token,
            }
        });
    }

    /// A card was dropped on a column
    pub fn handle_drop(&mut self, task_id: Uuid, to: TaskStatus) {
        let Some(change) = self.board.plan_drop(task_id, to) else {
            return;
        };
        let Some(session) = self.session.clone() else {
            return;
        };
        let sync = self.sync.clone();
        self.spawn(async move {
            AppEvent::BoardLoaded {
                request: BoardRequest::Move,
                result: sync.move_task(&session, &change).await,
                token: session.token,
            }
        });
    }

    pub fn handle_create(&mut self) {
        let request = match self.task_form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };
        let Some(session) = self.session.clone() else {
            return;
        };
        self.error = None;

        let sync = self.sync.clone();
        self.spawn(async move {
            AppEvent::BoardLoaded {
                request: BoardRequest::Create,
                result: sync.create_task(&session, &request).await,
                token: session.token,
            }
        });
    }

    pub fn handle_delete(&mut self, task_id: Uuid) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let sync = self.sync.clone();
        self.spawn(async move {
            AppEvent::BoardLoaded {
                request: BoardRequest::Delete,
                result: sync.delete_task(&session, task_id).await,
                token: session.token,
            }
        });
    }
}
