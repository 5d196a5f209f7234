//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and registering through the API.

use axum_test::TestServer;
use sqlx::SqlitePool;
use taskboard::backend::auth::sessions::create_token;
use taskboard::backend::auth::users::create_user;
use taskboard::backend::server::config::AuthConfig;
use taskboard::shared::AuthResponse;
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user directly in the store
pub async fn create_test_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let config = AuthConfig::for_tests();
    let password_hash = bcrypt::hash(password, config.bcrypt_cost)?;
    let user = create_user(pool, username.to_string(), email.to_string(), password_hash).await?;
    let token = create_token(&config, &user)?;

    Ok(TestUser {
        id: user.id,
        username: user.username,
        email: user.email,
        password: password.to_string(),
        token,
    })
}

/// Create a test user with a unique username and email
pub async fn create_unique_test_user(pool: &SqlitePool) -> Result<TestUser, Box<dyn std::error::Error>> {
    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("user_{}", &suffix[..8]);
    let email = format!("{}@example.com", username);
    create_test_user(pool, &username, &email, "test_password_123").await
}

/// Register through the API and return the response body
pub async fn register_via_api(server: &TestServer, username: &str, email: &str, password: &str) -> AuthResponse {
    let response = server
        .post("/api/users/register")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
