//! Runtime configuration.
//!
//! The service location is never compiled into the client: it comes from
//! the environment or the command line, with a localhost default for
//! development.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Env var overriding the service base URL.
pub const ENV_BASE_URL: &str = "STROKE_RISK_URL";

/// Env var setting a request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "STROKE_RISK_TIMEOUT_SECS";

const PREDICT_PATH: &str = "/api/predict";

/// A setting that was present but could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, .0)]
    InvalidTimeout(String),
}

/// Configuration for the client and the TUI.
///
/// # Example
///
/// ```
/// use stroke_risk::config::AppConfig;
///
/// let config = AppConfig::default().with_base_url("http://10.0.0.5:8000/");
/// assert_eq!(config.predict_url(), "http://10.0.0.5:8000/api/predict");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Service base URL, without a trailing slash
    pub base_url: String,
    /// Request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// Probe the service health endpoint on startup
    pub health_check: bool,
    /// Where the log file goes; `None` disables file logging
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            health_check: true,
            log_dir: dirs::data_local_dir().map(|dir| dir.join("stroke-risk")),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Defaults overlaid with `STROKE_RISK_URL` and `STROKE_RISK_TIMEOUT_SECS`.
    ///
    /// A timeout that is not a positive integer is ignored and reported in
    /// the returned warnings, which the caller logs once logging is up.
    pub fn from_env() -> (Self, Vec<ConfigWarning>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_request_timeout(Some(Duration::from_secs(secs)));
                }
                _ => warnings.push(ConfigWarning::InvalidTimeout(raw)),
            }
        }

        (config, warnings)
    }

    /// Full URL of the prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }

    /// Full URL of the health endpoint (the service root).
    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}
