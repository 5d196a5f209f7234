/**
 * Server Configuration
 *
 * This module loads the server settings from environment variables and
 * opens the SQLite pool.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - SQLite URL (default `sqlite://taskboard.db?mode=rwc`)
 * - `SERVER_PORT` - listen port (default 5000)
 * - `JWT_SECRET` - token signing secret (development fallback with a warning)
 * - `TOKEN_TTL_HOURS` - token lifetime in hours (default 720)
 * - `BCRYPT_COST` - password hashing cost (default `bcrypt::DEFAULT_COST`)
 *
 * Invalid values abort startup with a `ConfigError`.
 */

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::backend::error::BackendError;
use crate::shared::config::{env_or, ConfigError};

const DEFAULT_DATABASE_URL: &str = "sqlite://taskboard.db?mode=rwc";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TOKEN_TTL_HOURS: u64 = 30 * 24;
const DEV_JWT_SECRET: &str = "taskboard-dev-secret-change-in-production";
/// Range accepted by `bcrypt::hash`
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Settings for token issuing and password hashing
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };
        let ttl_hours: u64 = env_or("TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?;
        let bcrypt_cost: u32 = env_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(Self {
            jwt_secret,
            token_ttl: token_ttl_from_hours(ttl_hours)?,
            bcrypt_cost,
        })
    }

    /// Fixed secret and the cheapest hash cost, for tests
    pub fn for_tests() -> Self {
        Self {
            jwt_secret: "test-secret".to_string(),
            token_ttl: Duration::from_secs(60 * 60),
            bcrypt_cost: MIN_BCRYPT_COST,
        }
    }
}

/// Convert `TOKEN_TTL_HOURS` to a duration, rejecting values too large to
/// express in seconds
fn token_ttl_from_hours(hours: u64) -> Result<Duration, ConfigError> {
    hours
        .checked_mul(60 * 60)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "TOKEN_TTL_HOURS",
            value: hours.to_string(),
        })
}

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidUrl(database_url));
        }

        Ok(Self {
            database_url,
            port: env_or("SERVER_PORT", DEFAULT_PORT)?,
            auth: AuthConfig::from_env()?,
        })
    }
}

/// Open the SQLite pool and run migrations
///
/// Foreign keys are enabled on every connection so `assigned_to` cannot
/// point at a missing user.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database lives only as long as its single connection.
    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| BackendError::internal(format!("migration failed: {}", e)))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
