//! Configuration handling for the TUI

use crate::contact::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use anyhow::Result;
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable that overrides the configured contact endpoint
pub const ENDPOINT_ENV_VAR: &str = "APEXWEB_CONTACT_ENDPOINT";

/// Environment variable that overrides the log directory
pub const LOG_DIR_ENV_VAR: &str = "APEXWEB_LOG_DIR";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "apexweb-tui.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid contact endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Contact endpoint URL
    pub contact_endpoint: Option<String>,
    /// Deadline for one submission, in seconds
    pub submit_timeout_secs: Option<u64>,
    /// Show the startup splash
    pub show_splash: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "apexweb", "apexweb-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> PathBuf {
        let data_dir = ProjectDirs::from("io", "apexweb", "apexweb-tui")
            .map(|dirs| dirs.data_local_dir().to_path_buf());
        resolve_log_dir(std::env::var(LOG_DIR_ENV_VAR).ok(), data_dir)
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The endpoint to submit to: environment override, then config file,
    /// then the default
    pub fn contact_endpoint(&self) -> Result<String, ConfigError> {
        resolve_endpoint(
            std::env::var(ENDPOINT_ENV_VAR).ok(),
            self.contact_endpoint.as_deref(),
        )
    }

    pub fn submit_timeout(&self) -> Duration {
        match self.submit_timeout_secs {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => DEFAULT_TIMEOUT,
        }
    }

    pub fn splash_enabled(&self) -> bool {
        self.show_splash.unwrap_or(true)
    }
}

fn resolve_endpoint(
    from_env: Option<String>,
    configured: Option<&str>,
) -> Result<String, ConfigError> {
    let endpoint = from_env
        .filter(|e| !e.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let endpoint = endpoint.trim().to_string();

    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.clone(),
        reason,
    };
    let url = Url::parse(&endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(endpoint),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}

/// Environment override, then the platform data directory, then the
/// system temp directory
fn resolve_log_dir(from_env: Option<String>, data_dir: Option<PathBuf>) -> PathBuf {
    from_env
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .or(data_dir)
        .unwrap_or_else(std::env::temp_dir)
}
