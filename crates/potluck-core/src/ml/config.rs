//! ML backend configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default base URL for the ML backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the external ML service.
#[derive(Debug, Clone)]
pub struct MlConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl MlConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `ML_BACKEND_URL`: base URL (default: "http://localhost:8000")
    /// - `ML_BACKEND_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("ML_BACKEND_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("ML_BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for MlConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
