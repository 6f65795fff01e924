//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use mdeploy_config::ConfigError;
use mdeploy_core::CoreError;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const VERIFICATION: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the dashboard at {url}")]
    #[diagnostic(
        code(mdeploy::connection_failed),
        help("Check network access and `dashboard_api_base_url` in the configuration file.\n{reason}")
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Dashboard request timed out")]
    #[diagnostic(
        code(mdeploy::timeout),
        help("Increase the limit with --timeout or the `timeout` configuration key.")
    )]
    Timeout,

    #[error("Rate limited by the dashboard")]
    #[diagnostic(
        code(mdeploy::rate_limited),
        help("Retry in {retry_after_secs}s.")
    )]
    RateLimited { retry_after_secs: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(mdeploy::auth_failed),
        help("Verify the API key in MERAKI_API_KEY or `meraki_api_key`.")
    )]
    AuthFailed { message: String },

    #[error("No API key configured")]
    #[diagnostic(
        code(mdeploy::no_credentials),
        help("Set MERAKI_API_KEY or add `meraki_api_key` to the configuration file.")
    )]
    NoCredentials,

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(mdeploy::permission_denied),
        help("The API key needs write access to the organization.")
    )]
    PermissionDenied { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(mdeploy::no_config),
        help(
            "Create it with at least `organization_id`, or point to another file \
             with --config / MDEPLOY_CONFIG."
        )
    )]
    NoConfig { path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(mdeploy::validation))]
    Validation { field: String, reason: String },

    #[error("Could not load configuration: {message}")]
    #[diagnostic(code(mdeploy::config))]
    Config { message: String },

    // ── Deployment ───────────────────────────────────────────────────
    #[error("Network '{name}' already exists")]
    #[diagnostic(
        code(mdeploy::network_exists),
        help("Use --ignore-existing to deploy into it, or pick another --network-name.")
    )]
    NetworkExists { name: String },

    #[error("No matching device in inventory for: {missing}")]
    #[diagnostic(
        code(mdeploy::devices_not_found),
        help("Pass --switch-serial / --appliance-serial explicitly.")
    )]
    DevicesNotFound { missing: String },

    #[error("Not found: {path}")]
    #[diagnostic(code(mdeploy::not_found))]
    NotFound { path: String },

    #[error("Failed to claim {class} {serial}: {message}")]
    #[diagnostic(code(mdeploy::claim_failed))]
    ClaimFailed {
        class: String,
        serial: String,
        message: String,
    },

    #[error("{class} {serial} did not appear in network {network_id}")]
    #[diagnostic(
        code(mdeploy::verification_failed),
        help("The claim was accepted but the device is not listed in the network. Check the dashboard.")
    )]
    VerificationFailed {
        class: String,
        serial: String,
        network_id: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error ({status}): {message}")]
    #[diagnostic(code(mdeploy::api_error))]
    ApiError { status: String, message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error("Could not open log file in {dir}")]
    #[diagnostic(code(mdeploy::log_file), help("Choose a writable directory with --log-dir."))]
    LogFile {
        dir: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Could not serialize report: {0}")]
    #[diagnostic(code(mdeploy::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials => exit_code::AUTH,
            Self::PermissionDenied { .. } => exit_code::PERMISSION,
            Self::NoConfig { .. } | Self::DevicesNotFound { .. } | Self::NotFound { .. } => {
                exit_code::NOT_FOUND
            }
            Self::Validation { .. } => exit_code::USAGE,
            Self::NetworkExists { .. } => exit_code::CONFLICT,
            Self::VerificationFailed { .. } => exit_code::VERIFICATION,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { path } => CliError::NoConfig {
                path: path.display().to_string(),
            },
            ConfigError::MissingKey {
                key: "meraki_api_key",
            } => CliError::NoCredentials,
            ConfigError::MissingKey { key } => CliError::Validation {
                field: key.into(),
                reason: "required key is missing".into(),
            },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(err) => CliError::Config {
                message: err.to_string(),
            },
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::PermissionDenied { message } => CliError::PermissionDenied { message },
            CoreError::Timeout => CliError::Timeout,
            CoreError::RateLimited { retry_after_secs } => {
                CliError::RateLimited { retry_after_secs }
            }
            CoreError::NetworkExists { name } => CliError::NetworkExists { name },
            CoreError::DevicesNotFound { missing } => CliError::DevicesNotFound {
                missing: missing
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            },
            CoreError::TemplateNotFound { name } => CliError::NotFound {
                path: format!("configuration template '{name}'"),
            },
            CoreError::ClaimFailed {
                class,
                serial,
                message,
            } => CliError::ClaimFailed {
                class: class.to_string(),
                serial,
                message,
            },
            CoreError::VerificationFailed {
                class,
                serial,
                network_id,
            } => CliError::VerificationFailed {
                class: class.to_string(),
                serial,
                network_id,
            },
            CoreError::NotFound { path } => CliError::NotFound { path },
            CoreError::Api { message, status } => CliError::ApiError {
                status: status.map_or_else(|| "-".into(), |s| s.to_string()),
                message,
            },
            CoreError::Config { message } => CliError::Config { message },
        }
    }
}
