use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_HOST: &str = "TESTRAIL_HOST";
pub const ENV_USERNAME: &str = "TESTRAIL_USERNAME";
pub const ENV_PASSWORD: &str = "TESTRAIL_PASSWORD";
pub const ENV_RUN_ID: &str = "TESTRAIL_RUN_ID";
pub const ENV_MAPPING_FILE: &str = "TESTRAIL_MAPPING_FILE";
pub const ENV_MAPPING_ONLY: &str = "TESTRAIL_MAPPING_ONLY";

pub const DEFAULT_MAPPING_FILE: &str = "testrail_mapping.csv";

/// Connection and output settings for TestRail reporting.
///
/// Missing credentials are not an error: they disable network reporting
/// while leaving mapping-file output active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRailConfig {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub run_id: Option<String>,
    /// Path for the local test-to-case mapping file. `None` disables
    /// mapping output entirely.
    pub mapping_file: Option<PathBuf>,
    /// Write mapping lines but never send results over the network.
    pub mapping_only: bool,
    /// HTTP request timeout. `None` waits indefinitely for the server.
    pub timeout: Option<Duration>,
}

impl Default for TestRailConfig {
    fn default() -> Self {
        Self {
            host: None,
            username: None,
            password: None,
            run_id: None,
            mapping_file: Some(PathBuf::from(DEFAULT_MAPPING_FILE)),
            mapping_only: false,
            timeout: None,
        }
    }
}

impl TestRailConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the configuration from `TESTRAIL_*` environment variables,
    /// read once. An empty `TESTRAIL_MAPPING_FILE` disables mapping output;
    /// an unset one falls back to [`DEFAULT_MAPPING_FILE`].
    pub fn from_env() -> Self {
        let mapping_file = match env::var(ENV_MAPPING_FILE) {
            Ok(path) if path.is_empty() => None,
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => Some(PathBuf::from(DEFAULT_MAPPING_FILE)),
        };

        Self {
            host: env::var(ENV_HOST).ok().filter(|v| !v.is_empty()),
            username: env::var(ENV_USERNAME).ok().filter(|v| !v.is_empty()),
            password: env::var(ENV_PASSWORD).ok().filter(|v| !v.is_empty()),
            run_id: env::var(ENV_RUN_ID).ok().filter(|v| !v.is_empty()),
            mapping_file,
            mapping_only: env::var(ENV_MAPPING_ONLY)
                .map(|v| !v.is_empty())
                .unwrap_or(false),
            timeout: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }

    pub fn with_mapping_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.mapping_file = Some(path.into());
        self
    }

    pub fn without_mapping_file(mut self) -> Self {
        self.mapping_file = None;
        self
    }

    pub fn with_mapping_only(mut self, mapping_only: bool) -> Self {
        self.mapping_only = mapping_only;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// True when host, username, password and run id are all present.
    pub fn credentials_complete(&self) -> bool {
        self.host.is_some()
            && self.username.is_some()
            && self.password.is_some()
            && self.run_id.is_some()
    }

    /// True when results should actually be sent over the network.
    pub fn reporting_enabled(&self) -> bool {
        self.credentials_complete() && !self.mapping_only
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(host) = &self.host {
            if host.is_empty() {
                return Err("Host cannot be empty".to_string());
            }
        }

        if let Some(username) = &self.username {
            if username.is_empty() {
                return Err("Username cannot be empty".to_string());
            }
        }

        if let Some(password) = &self.password {
            if password.is_empty() {
                return Err("Password cannot be empty".to_string());
            }
        }

        if let Some(run_id) = &self.run_id {
            if run_id.is_empty() {
                return Err("Run id cannot be empty".to_string());
            }
        }

        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err("Timeout must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}
