use std::time::Duration;

use serde::Deserialize;

use crate::utils::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_URL};

/// ================================
/// Optional YAML configuration file
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub service_url: Option<String>,
    /// overall deadline for the token request
    pub timeout_secs: Option<u64>,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(default_log_level(), LogFormat::default())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Compact,
}

/// Values supplied on the command line. Empty strings count as "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub username: String,
    pub password: String,
    pub override_url: String,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

/// ================================
/// Resolved settings for a single run
/// ================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub username: String,
    pub password: String,
    pub service_url: String,
    pub timeout: Option<Duration>,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Command line beats the file, the file beats the built-in defaults.
    pub fn resolve(cli: CliOverrides, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();

        let username = non_empty(cli.username).or(file.username).unwrap_or_default();
        let password = non_empty(cli.password).or(file.password).unwrap_or_default();
        let service_url = non_empty(cli.override_url)
            .or(file.service_url.and_then(non_empty))
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_owned());
        let timeout = cli
            .timeout_secs
            .or(file.timeout_secs)
            .map(Duration::from_secs);

        let mut logging = file.logging.unwrap_or_default();
        if let Some(level) = cli.log_level {
            logging.level = level;
        }

        Self { username, password, service_url, timeout, logging }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
