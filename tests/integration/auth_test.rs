//! Authentication API integration tests
//!
//! Registration, login, token checks and the user endpoints.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use taskboard::backend::auth::sessions::create_token;
use taskboard::backend::auth::users::get_user_by_id;
use taskboard::backend::server::config::AuthConfig;
use taskboard::shared::{AuthResponse, UserResponse};

use crate::common::*;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body["user"]["_id"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_keeps_first_account() {
    let app = TestApp::new().await;
    let first = register_via_api(&app.server, "alice", "alice@example.com", "original-pw").await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({
            "username": "impostor",
            "email": "Alice@Example.com",
            "password": "other-pw"
        }))
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Email already registered");

    // The original password still works
    let login = app
        .server
        .post("/api/users/login")
        .json(&json!({ "email": "alice@example.com", "password": "original-pw" }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let body: AuthResponse = login.json();
    assert_eq!(body.user.id, first.user.id);

    let stored = get_user_by_id(app.pool(), first.user.id).await.unwrap().unwrap();
    assert!(bcrypt::verify("original-pw", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    register_via_api(&app.server, "alice", "alice@example.com", "pw").await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({ "username": "alice", "email": "other@example.com", "password": "pw" }))
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Username already taken");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({ "email": "alice@example.com" }))
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "required");
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/users/login")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let user = create_test_user(app.pool(), "bob", "bob@example.com", "password123")
        .await
        .unwrap();

    let response = app
        .server
        .post("/api/users/login")
        .json(&json!({ "email": "BOB@example.com", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: AuthResponse = response.json();
    assert_eq!(body.user.id, user.id);
    assert_eq!(body.user.username, "bob");
    assert!(!body.token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password_issues_no_token() {
    let app = TestApp::new().await;
    create_test_user(app.pool(), "bob", "bob@example.com", "password123")
        .await
        .unwrap();

    let response = app
        .server
        .post("/api/users/login")
        .json(&json!({ "email": "bob@example.com", "password": "wrong" }))
        .await;

    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
    let body: Value = response.json();
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/users/login")
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .await;

    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_list_users_requires_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/users").await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Authentication required");
}

#[tokio::test]
async fn test_list_users_public_fields_only() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();
    create_unique_test_user(app.pool()).await.unwrap();

    let response = app
        .server
        .get("/api/users")
        .authorization_bearer(&user.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let raw: Vec<Value> = response.json();
    assert_eq!(raw.len(), 2);
    for entry in &raw {
        let keys: Vec<&str> = entry.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3, "unexpected fields: {:?}", keys);
    }
    let users: Vec<UserResponse> = response.json();
    assert!(users.iter().any(|u| u.id == user.id));
}

#[tokio::test]
async fn test_me_returns_token_owner() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();

    let response = app
        .server
        .get("/api/users/me")
        .authorization(auth_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let me: UserResponse = response.json();
    assert_eq!(me.id, user.id);
    assert_eq!(me.email, user.email);
}

#[tokio::test]
async fn test_invalid_and_foreign_tokens_are_rejected() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(app.pool()).await.unwrap();

    let response = app
        .server
        .get("/api/users/me")
        .authorization_bearer("not-a-jwt")
        .await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid or expired token");

    let other = AuthConfig {
        jwt_secret: "someone-else".to_string(),
        ..AuthConfig::for_tests()
    };
    let stored = get_user_by_id(app.pool(), user.id).await.unwrap().unwrap();
    let forged = create_token(&other, &stored).unwrap();
    let response = app
        .server
        .get("/api/users/me")
        .authorization_bearer(forged)
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/nope").await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "not found");
}
