use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

/// Configuration for the remote profile service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the profile service (e.g., "http://127.0.0.1:8000")
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::api("api.base_url must not be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::api("api.request_timeout_secs must be >= 1"));
        }

        Ok(())
    }
}
