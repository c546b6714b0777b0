//! Runtime configuration.
//!
//! Values come from defaults, then `config.json` in the platform config
//! directory, then `DASHBOARD_*` environment variables (highest priority).

use std::{fs, path::PathBuf, str::FromStr, time::Duration};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_BASE_URL: &str = "DASHBOARD_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "DASHBOARD_REQUEST_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "DASHBOARD_LOG_LEVEL";
pub const ENV_SURFACE_FETCH_ERRORS: &str = "DASHBOARD_SURFACE_FETCH_ERRORS";

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "FreightDashboard";
const APP_NAME: &str = "FreightDashboard";
const CONFIG_FILENAME: &str = "config.json";
const FILE_REQUEST_TIMEOUT_SECS: &str = "request_timeout_secs";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{name} must be a positive whole number of seconds, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
    #[error("invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
    #[error("configuration file error: {0}")]
    File(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    pub fn as_tracing(&self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Root of the backend API. Always ends with `/`.
    pub api_base_url: Url,
    pub request_timeout: Duration,
    pub log_level: LogLevel,
    /// Show failed fetches as a toast instead of only logging them.
    pub surface_fetch_errors: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_level: LogLevel::default(),
            surface_fetch_errors: false,
        }
    }
}

/// Shape of `config.json`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    log_level: Option<LogLevel>,
    surface_fetch_errors: Option<bool>,
}

impl DashboardConfig {
    /// Builds the configuration from all sources.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = config_file() {
            if path.exists() {
                let content = fs::read_to_string(&path).map_err(|e| {
                    ConfigError::File(format!("failed to read {}: {e}", path.display()))
                })?;
                config.apply_file(&content)?;
            }
        }
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    fn apply_file(&mut self, content: &str) -> Result<(), ConfigError> {
        let file: FileConfig = serde_json::from_str(content)
            .map_err(|e| ConfigError::File(format!("failed to parse JSON: {e}")))?;

        if let Some(raw) = file.api_base_url {
            self.api_base_url = normalize_base_url(&raw)?;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = timeout_from_secs(FILE_REQUEST_TIMEOUT_SECS, &secs.to_string())?;
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }
        if let Some(flag) = file.surface_fetch_errors {
            self.surface_fetch_errors = flag;
        }
        Ok(())
    }

    /// Applies overrides from a variable lookup; tests pass a map instead of
    /// the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_API_BASE_URL) {
            self.api_base_url = normalize_base_url(&raw)?;
        }

        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            self.request_timeout = timeout_from_secs(ENV_REQUEST_TIMEOUT_SECS, &raw)?;
        }

        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&raw)?;
        }

        if let Some(raw) = lookup(ENV_SURFACE_FETCH_ERRORS) {
            self.surface_fetch_errors = parse_flag(ENV_SURFACE_FETCH_ERRORS, &raw)?;
        }

        Ok(())
    }
}

/// Parses a base URL and makes sure its path ends with `/`, so joining
/// `orders/` onto `http://host/api` yields `http://host/api/orders/`.
pub fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// A zero timeout would fail every request before it is sent.
fn timeout_from_secs(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.surface_fetch_errors);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DashboardConfig::default();
        config
            .apply_env(lookup(&[
                (ENV_API_BASE_URL, "https://freight.example.com/api"),
                (ENV_REQUEST_TIMEOUT_SECS, "5"),
                (ENV_LOG_LEVEL, "DEBUG"),
                (ENV_SURFACE_FETCH_ERRORS, "yes"),
            ]))
            .unwrap();
        assert_eq!(
            config.api_base_url.as_str(),
            "https://freight.example.com/api/"
        );
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.surface_fetch_errors);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let mut config = DashboardConfig::default();
        assert!(matches!(
            config.apply_env(lookup(&[(ENV_REQUEST_TIMEOUT_SECS, "soon")])),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            config.apply_env(lookup(&[(ENV_SURFACE_FETCH_ERRORS, "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert!(matches!(
            config.apply_env(lookup(&[(ENV_API_BASE_URL, "not a url")])),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_file_then_env_priority() {
        let mut config = DashboardConfig::default();
        config
            .apply_file(r#"{"api_base_url": "http://file-host:9000", "log_level": "warn"}"#)
            .unwrap();
        config
            .apply_env(lookup(&[(ENV_API_BASE_URL, "http://env-host:9001/")]))
            .unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://env-host:9001/");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = DashboardConfig::default();
        assert!(matches!(
            config.apply_env(lookup(&[(ENV_REQUEST_TIMEOUT_SECS, "0")])),
            Err(ConfigError::InvalidNumber { name: ENV_REQUEST_TIMEOUT_SECS, .. })
        ));
        assert!(matches!(
            config.apply_file(r#"{"request_timeout_secs": 0}"#),
            Err(ConfigError::InvalidNumber { name: "request_timeout_secs", .. })
        ));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_file_rejects_malformed_json() {
        let mut config = DashboardConfig::default();
        assert!(matches!(
            config.apply_file("{ nope"),
            Err(ConfigError::File(_))
        ));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("Error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("loud").is_err());
        assert_eq!(LogLevel::Warn.as_tracing(), Level::WARN);
    }
}
