// ── Core error types ──
//
// Deployment-level errors. Consumers never match on HTTP status codes
// directly: the `From<mdeploy_api::Error>` impl translates transport-layer
// errors into the variants below, and each orchestration stage adds its
// own domain failures (conflicts, missing hardware, failed verification).

use thiserror::Error;

use crate::model::DeviceClass;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the dashboard at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Dashboard request timed out")]
    Timeout,

    #[error("Rate limited by the dashboard (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    // ── Deployment errors ────────────────────────────────────────────
    #[error("Network '{name}' already exists")]
    NetworkExists { name: String },

    #[error("No matching device in inventory for: {}", join_classes(.missing))]
    DevicesNotFound { missing: Vec<DeviceClass> },

    #[error("Configuration template '{name}' not found")]
    TemplateNotFound { name: String },

    #[error("Failed to claim {class} {serial}: {message}")]
    ClaimFailed {
        class: DeviceClass,
        serial: String,
        message: String,
    },

    #[error("{class} {serial} is not present in network {network_id} after claim")]
    VerificationFailed {
        class: DeviceClass,
        serial: String,
        network_id: String,
    },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Entity not found: {path}")]
    NotFound { path: String },

    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

fn join_classes(classes: &[DeviceClass]) -> String {
    classes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<mdeploy_api::Error> for CoreError {
    fn from(err: mdeploy_api::Error) -> Self {
        match err {
            mdeploy_api::Error::InvalidApiKey => CoreError::AuthenticationFailed {
                message: "Invalid API key".into(),
            },
            mdeploy_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            mdeploy_api::Error::PermissionDenied { message } => {
                CoreError::PermissionDenied { message }
            }
            mdeploy_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            mdeploy_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid dashboard URL: {e}"),
            },
            mdeploy_api::Error::ClientBuild(message) => CoreError::Config { message },
            mdeploy_api::Error::NotFound { path } => CoreError::NotFound { path },
            mdeploy_api::Error::RateLimited { retry_after_secs } => {
                CoreError::RateLimited { retry_after_secs }
            }
            mdeploy_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            mdeploy_api::Error::Deserialization { message, body: _ } => CoreError::Api {
                message: format!("unexpected response: {message}"),
                status: None,
            },
        }
    }
}
