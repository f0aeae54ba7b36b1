//! Gateway configuration.

use std::env;
use std::time::Duration;

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the interview service.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Creates a configuration for the given service address with the
    /// default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// `VIVA_SERVICE_URL` overrides the default service address
    /// (`http://127.0.0.1:8000`); `VIVA_REQUEST_TIMEOUT_SECS` overrides
    /// the request timeout.
    pub fn from_env() -> Self {
        let base_url =
            env::var("VIVA_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        let timeout = env::var("VIVA_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self { base_url, timeout }
    }

    /// Overrides the request timeout after construction.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL)
    }
}
