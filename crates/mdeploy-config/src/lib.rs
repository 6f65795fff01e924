//! Configuration for the mdeploy binary.
//!
//! A JSON file (default `config.json`) layered over built-in defaults, with
//! `MERAKI_API_KEY` from the environment taking precedence over the file's
//! key. The result is translated into `mdeploy_core`'s runtime types once at
//! startup.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use mdeploy_core::config::{
    DEFAULT_APPLIANCE_MODEL_PATTERN, DEFAULT_BASE_URL, DEFAULT_SWITCH_MODEL_PATTERN,
    DEFAULT_TIMEZONE,
};
use mdeploy_core::{DashboardConfig, DeploymentSettings};

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides `meraki_api_key`.
pub const API_KEY_ENV: &str = "MERAKI_API_KEY";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("missing required configuration key '{key}'")]
    MissingKey { key: &'static str },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── File layout ─────────────────────────────────────────────────────

/// The configuration file as written on disk.
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub dashboard_api_base_url: String,

    pub organization_id: Option<String>,

    /// Plaintext key. `MERAKI_API_KEY` wins when set.
    pub meraki_api_key: Option<String>,

    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    #[serde(default = "default_switch_pattern")]
    pub switch_model_pattern: String,

    #[serde(default = "default_appliance_pattern")]
    pub appliance_model_pattern: String,

    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard_api_base_url: default_base_url(),
            organization_id: None,
            meraki_api_key: None,
            default_timezone: default_timezone(),
            switch_model_pattern: default_switch_pattern(),
            appliance_model_pattern: default_appliance_pattern(),
            timeout: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("dashboard_api_base_url", &self.dashboard_api_base_url)
            .field("organization_id", &self.organization_id)
            .field(
                "meraki_api_key",
                &self.meraki_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("default_timezone", &self.default_timezone)
            .field("switch_model_pattern", &self.switch_model_pattern)
            .field("appliance_model_pattern", &self.appliance_model_pattern)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timezone() -> String {
    DEFAULT_TIMEZONE.into()
}
fn default_switch_pattern() -> String {
    DEFAULT_SWITCH_MODEL_PATTERN.into()
}
fn default_appliance_pattern() -> String {
    DEFAULT_APPLIANCE_MODEL_PATTERN.into()
}

// ── Loading ─────────────────────────────────────────────────────────

/// Read `path` over the defaults, then apply the environment key override.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Json::file(path))
        .merge(Env::raw().only(&[API_KEY_ENV]))
        .extract()?;
    Ok(config)
}

/// Everything the binary needs to start a run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub dashboard: DashboardConfig,
    pub deployment: DeploymentSettings,
}

impl Config {
    /// Check required keys and build the runtime configuration.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        let organization_id = non_empty(self.organization_id).ok_or(ConfigError::MissingKey {
            key: "organization_id",
        })?;
        let api_key = non_empty(self.meraki_api_key).ok_or(ConfigError::MissingKey {
            key: "meraki_api_key",
        })?;

        let base_url =
            Url::parse(&self.dashboard_api_base_url).map_err(|e| ConfigError::Validation {
                field: "dashboard_api_base_url".into(),
                reason: format!("'{}': {e}", self.dashboard_api_base_url),
            })?;

        for (field, value) in [
            ("default_timezone", &self.default_timezone),
            ("switch_model_pattern", &self.switch_model_pattern),
            ("appliance_model_pattern", &self.appliance_model_pattern),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation {
                    field: field.into(),
                    reason: "must not be empty".into(),
                });
            }
        }

        Ok(ResolvedConfig {
            dashboard: DashboardConfig {
                base_url,
                organization_id,
                api_key: SecretString::from(api_key),
                timeout: self.timeout.map(Duration::from_secs),
            },
            deployment: DeploymentSettings {
                default_timezone: self.default_timezone,
                switch_model_pattern: self.switch_model_pattern,
                appliance_model_pattern: self.appliance_model_pattern,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Load and resolve in one step.
pub fn load(path: &Path) -> Result<ResolvedConfig, ConfigError> {
    load_config(path)?.resolve()
}
