// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Write one decision-log line per routed request
    #[serde(default = "default_access_log")]
    pub access_log: bool,
    /// Decision log format (text, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Decision log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_level() -> String {
    "info".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            access_log: default_access_log(),
            access_log_format: default_access_log_format(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Value of the `Server` header on built responses
    #[serde(default = "default_server_name")]
    pub server_name: String,
    /// Extract `callback` names for dynamic requests
    #[serde(default = "default_enable_jsonp")]
    pub enable_jsonp: bool,
}

#[allow(clippy::missing_const_for_fn)]
fn default_server_name() -> String {
    "netp/0.1".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_enable_jsonp() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            enable_jsonp: default_enable_jsonp(),
        }
    }
}
