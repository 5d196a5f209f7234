use crate::shared::config::{normalize_base_url, ConfigError};

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    server_url: String,
}

impl Config {
    /// Read `TASKBOARD_API_URL`, falling back to [`DEFAULT_SERVER_URL`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url = std::env::var("TASKBOARD_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self::with_server_url(&server_url)
    }

    pub fn with_server_url(server_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            server_url: normalize_base_url(server_url)?,
        })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}
