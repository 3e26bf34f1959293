//! Process settings read from the environment
//!
//! - `CF_CLI_LOG`: log level (trace, debug, info, warn, error; default warn)
//! - `CF_CLI_API_BASE`: API origin (default `https://api.cloudflare.com/client/v4`)
//! - `CF_CLI_CONFIG`: credential file path (default `$HOME/.cf_cli_config`)
//! - `CF_CLI_TIMEOUT_SECS`: transport timeout in seconds (1 to 600; unset means none)

use anyhow::{Context, Result};
use cfcli_core::config::DEFAULT_API_BASE;
use cfcli_http::TransportSettings;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

pub const ENV_LOG: &str = "CF_CLI_LOG";
pub const ENV_API_BASE: &str = "CF_CLI_API_BASE";
pub const ENV_CONFIG: &str = "CF_CLI_CONFIG";
pub const ENV_TIMEOUT_SECS: &str = "CF_CLI_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
    pub api_base: String,
    pub config_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            config_path: None,
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load settings through a variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{ENV_TIMEOUT_SECS} is not a number. Got: {raw}"))?,
            ),
            None => None,
        };

        Ok(Self {
            log_level: lookup(ENV_LOG).unwrap_or(defaults.log_level),
            api_base: lookup(ENV_API_BASE).unwrap_or(defaults.api_base),
            config_path: lookup(ENV_CONFIG)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            timeout_secs,
        })
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !self.api_base.starts_with("https://") && !self.api_base.starts_with("http://") {
            anyhow::bail!(
                "{ENV_API_BASE} must use HTTP or HTTPS scheme. Got: {}",
                self.api_base
            );
        }

        if let Some(timeout) = self.timeout_secs
            && !(1..=600).contains(&timeout)
        {
            anyhow::bail!(
                "{ENV_TIMEOUT_SECS} must be between 1 and 600 seconds. Got: {}",
                timeout
            );
        }

        if self.level().is_none() {
            anyhow::bail!(
                "{ENV_LOG} '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            );
        }

        Ok(())
    }

    /// Maximum tracing level
    pub fn level(&self) -> Option<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }

    pub fn transport_settings(&self) -> TransportSettings {
        match self.timeout_secs {
            Some(secs) => TransportSettings::with_timeout(Duration::from_secs(secs)),
            None => TransportSettings::default(),
        }
    }
}
