//! Task API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use taskboard::shared::{Priority, Task, TaskStatus};
use uuid::Uuid;

use crate::common::*;

async fn create(app: &TestApp, token: &str, body: Value) -> Task {
    let response = app
        .server
        .post("/api/tasks/create-task")
        .authorization_bearer(token)
        .json(&body)
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn list(app: &TestApp, token: &str) -> Vec<Task> {
    let response = app.server.get("/api/tasks").authorization_bearer(token).await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_create_then_list_contains_task() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();

    let created = create(
        &app,
        &user.token,
        json!({
            "title": "Write report",
            "description": "Quarterly numbers",
            "dueDate": "2025-06-30",
            "priority": "High",
            "status": "In Progress",
            "assignedTo": user.id,
        }),
    )
    .await;

    assert_eq!(created.title, "Write report");
    assert_eq!(created.description.as_deref(), Some("Quarterly numbers"));
    assert_eq!(created.due_date.map(|d| d.to_string()).as_deref(), Some("2025-06-30"));
    assert_eq!(created.priority, Priority::High);
    assert_eq!(created.status, TaskStatus::InProgress);
    assert_eq!(created.created_by, Some(user.id));
    let assignee = created.assigned_to.clone().unwrap();
    assert_eq!((assignee.id, assignee.username.as_str()), (user.id, user.username.as_str()));

    let tasks = list(&app, &user.token).await;
    assert_eq!(tasks, vec![created]);
}

#[tokio::test]
async fn test_create_wire_format() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();

    let response = app
        .server
        .post("/api/tasks/create-task")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "Defaults" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["_id"].is_string());
    assert_eq!(body["priority"], "Low");
    assert_eq!(body["status"], "Todo");
    assert!(body["assignedTo"].is_null());
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_requires_title() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();

    let response = app
        .server
        .post("/api/tasks/create-task")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "   ", "priority": "High" }))
        .await;

    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Title is required");
    assert_eq!(app.task_count().await, 0);
}

#[tokio::test]
async fn test_create_rejects_unknown_enum_and_assignee() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();

    let response = app
        .server
        .post("/api/tasks/create-task")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "x", "status": "Blocked" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .post("/api/tasks/create-task")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "x", "assignedTo": Uuid::new_v4() }))
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Assigned user does not exist");

    assert_eq!(app.task_count().await, 0);
}

#[tokio::test]
async fn test_list_is_newest_first_and_shared() {
    let app = TestApp::new().await;
    let alice = create_unique_test_user(app.pool()).await.unwrap();
    let bob = create_unique_test_user(app.pool()).await.unwrap();

    let first = create(&app, &alice.token, json!({ "title": "first" })).await;
    let second = create(&app, &bob.token, json!({ "title": "second" })).await;

    let ids: Vec<Uuid> = list(&app, &alice.token).await.into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_get_task() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();
    let created = create(&app, &user.token, json!({ "title": "lookup" })).await;

    let response = app
        .server
        .get(&format!("/api/tasks/get-task/{}", created.id))
        .authorization_bearer(&user.token)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Task>(), created);

    let response = app
        .server
        .get("/api/tasks/get-task/not-an-id")
        .authorization_bearer(&user.token)
        .await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "Task not found");
}

#[tokio::test]
async fn test_status_update_moves_task_without_duplicates() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();
    let created = create(&app, &user.token, json!({ "title": "move me" })).await;

    let response = app
        .server
        .put(&format!("/api/tasks/update-task/{}", created.id))
        .authorization_bearer(&user.token)
        .json(&json!({ "status": "Done" }))
        .await;
    response.assert_status_ok();

    let tasks = list(&app, &user.token).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, created.id);
    assert_eq!(tasks[0].status, TaskStatus::Done);
    assert!(tasks[0].updated_at >= created.updated_at);
    assert_eq!(tasks[0].created_at, created.created_at);
}

#[tokio::test]
async fn test_partial_update_semantics() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();
    let created = create(
        &app,
        &user.token,
        json!({
            "title": "keep",
            "description": "clear me",
            "priority": "Medium",
            "assignedTo": user.id,
        }),
    )
    .await;

    let response = app
        .server
        .put(&format!("/api/tasks/update-task/{}", created.id))
        .authorization_bearer(&user.token)
        .json(&json!({ "description": null, "assignedTo": "" }))
        .await;
    response.assert_status_ok();
    let updated: Task = response.json();

    assert_eq!(updated.title, "keep");
    assert_eq!(updated.priority, Priority::Medium);
    assert_eq!(updated.description, None);
    assert_eq!(updated.assigned_to, None);
}

#[tokio::test]
async fn test_full_payload_echo_is_accepted() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();
    let created = create(&app, &user.token, json!({ "title": "echo", "assignedTo": user.id })).await;

    // A client may send back the task it fetched with the assignee populated
    let mut body = serde_json::to_value(&created).unwrap();
    body["status"] = json!("In Progress");

    let response = app
        .server
        .put(&format!("/api/tasks/update-task/{}", created.id))
        .authorization_bearer(&user.token)
        .json(&body)
        .await;
    response.assert_status_ok();
    let updated: Task = response.json();

    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.assigned_to, created.assigned_to);
}

#[tokio::test]
async fn test_update_unknown_task() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();

    let response = app
        .server
        .put(&format!("/api/tasks/update-task/{}", Uuid::new_v4()))
        .authorization_bearer(&user.token)
        .json(&json!({ "status": "Done" }))
        .await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "Task not found");
}

#[tokio::test]
async fn test_delete_then_get_and_delete_again() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();
    let keep = create(&app, &user.token, json!({ "title": "keep" })).await;
    let doomed = create(&app, &user.token, json!({ "title": "doomed" })).await;
    let path = format!("/api/tasks/delete-task/{}", doomed.id);

    let response = app.server.delete(&path).authorization_bearer(&user.token).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "message": "Task deleted successfully" }));

    let response = app
        .server
        .get(&format!("/api/tasks/get-task/{}", doomed.id))
        .authorization_bearer(&user.token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app.server.delete(&path).authorization_bearer(&user.token).await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "Task not found");

    assert_eq!(list(&app, &user.token).await, vec![keep]);
}

#[tokio::test]
async fn test_task_routes_reject_missing_or_bad_token_before_mutation() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();
    let existing = create(&app, &user.token, json!({ "title": "guarded" })).await;

    let create_response = app
        .server
        .post("/api/tasks/create-task")
        .json(&json!({ "title": "sneaky" }))
        .await;
    assert_eq!(create_response.status_code(), StatusCode::UNAUTHORIZED);

    let update_response = app
        .server
        .put(&format!("/api/tasks/update-task/{}", existing.id))
        .authorization_bearer("garbage")
        .json(&json!({ "status": "Done" }))
        .await;
    assert_eq!(update_response.status_code(), StatusCode::UNAUTHORIZED);

    let delete_response = app
        .server
        .delete(&format!("/api/tasks/delete-task/{}", existing.id))
        .authorization("Basic abc")
        .await;
    assert_eq!(delete_response.status_code(), StatusCode::UNAUTHORIZED);

    let list_response = app.server.get("/api/tasks").await;
    assert_eq!(list_response.status_code(), StatusCode::UNAUTHORIZED);

    assert_eq!(app.task_count().await, 1);
    assert_eq!(list(&app, &user.token).await, vec![existing]);
}
