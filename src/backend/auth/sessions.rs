/**
 * Session Tokens
 *
 * This module issues and validates the JWT bearer tokens that identify a
 * session. Tokens are HS256-signed with the configured secret and expire
 * after `AuthConfig::token_ttl`.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::server::config::AuthConfig;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub email: String,
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a JWT token for a user
pub fn create_token(config: &AuthConfig, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp().max(0) as u64;

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        username: user.username.clone(),
        exp: now.saturating_add(config.token_ttl.as_secs()),
        iat: now,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT token
///
/// Fails on a bad signature, a malformed token or an expired token.
pub fn verify_token(config: &AuthConfig, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}

/// Resolve a token to the user ID it was issued for
pub fn get_user_id_from_token(config: &AuthConfig, token: &str) -> Result<Uuid, BackendError> {
    let claims = verify_token(config, token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::auth("Invalid or expired token")
    })?;

    Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        BackendError::auth("Invalid or expired token")
    })
}
