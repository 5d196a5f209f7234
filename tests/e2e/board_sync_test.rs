//! Board client against a live server
//!
//! Binds the router to an ephemeral port and drives it through
//! `ApiClient` and `BoardSync`, the same path the desktop app uses.

use std::net::SocketAddr;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use taskboard::backend::routes::create_router;
use taskboard::board_app::{ApiClient, ApiError, Board, BoardSync, Config, Session};
use taskboard::shared::{CreateTaskRequest, LoginRequest, RegisterRequest, TaskStatus};

use crate::common::create_test_state;

async fn spawn_server() -> SocketAddr {
    let app = create_router(create_test_state().await);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client() -> BoardSync {
    let addr = spawn_server().await;
    let config = Config::with_server_url(&format!("http://{}", addr)).unwrap();
    BoardSync::new(ApiClient::new(config))
}

async fn register(sync: &BoardSync, username: &str) -> Session {
    let request = RegisterRequest {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: "password123".to_string(),
    };
    sync.api().register(&request).await.unwrap()
}

#[tokio::test]
async fn test_drag_between_columns_round_trip() {
    let sync = client().await;
    let session = register(&sync, "dana").await;

    let request = CreateTaskRequest {
        assigned_to: Some(session.user.id),
        ..CreateTaskRequest::new("Plan sprint")
    };
    let tasks = sync.create_task(&session, &request).await.unwrap();
    let mut board = Board::from_tasks(tasks);
    assert_eq!(board.column(TaskStatus::Todo).len(), 1);
    let task = board.column(TaskStatus::Todo)[0].clone();

    // Same-column drop plans nothing
    assert!(board.plan_drop(task.id, TaskStatus::Todo).is_none());

    let change = board.plan_drop(task.id, TaskStatus::Done).unwrap();
    board.replace(sync.move_task(&session, &change).await.unwrap());

    assert!(board.column(TaskStatus::Todo).is_empty());
    let moved = &board.column(TaskStatus::Done)[0];
    assert_eq!(moved.id, task.id);
    assert_eq!(moved.title, task.title);
    assert_eq!(moved.assigned_to, task.assigned_to);

    board.replace(sync.delete_task(&session, task.id).await.unwrap());
    assert!(board.is_empty());
}

#[tokio::test]
async fn test_login_failure_surfaces_server_message() {
    let sync = client().await;
    register(&sync, "erin").await;

    let err = sync
        .api()
        .login(&LoginRequest {
            email: "erin@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.is_auth());
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn test_rejected_session_is_auth_error() {
    let sync = client().await;
    let mut session = register(&sync, "frank").await;
    session.token = "tampered".to_string();

    let err = sync.refresh(&session).await.unwrap_err();
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_missing_task_is_not_found() {
    let sync = client().await;
    let session = register(&sync, "gina").await;

    let err = sync.delete_task(&session, uuid::Uuid::new_v4()).await.unwrap_err();
    assert_matches!(err, ApiError::Server { status, .. } if status == StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_users_listing_for_assignee_picker() {
    let sync = client().await;
    let session = register(&sync, "hank").await;
    register(&sync, "iris").await;

    let users = sync.api().list_users(&session).await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["hank", "iris"]);

    let fetched = sync.api().get_task(&session, uuid::Uuid::new_v4()).await;
    assert_matches!(fetched, Err(ApiError::Server { status, .. }) if status == StatusCode::NOT_FOUND);
}
