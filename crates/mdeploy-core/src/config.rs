// ── Runtime configuration ──
//
// Built once at startup (by `mdeploy-config`) and passed by reference to
// the dashboard handle and the orchestrator.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

pub use mdeploy_api::client::DEFAULT_BASE_URL;

pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";
pub const DEFAULT_SWITCH_MODEL_PATTERN: &str = "MS";
pub const DEFAULT_APPLIANCE_MODEL_PATTERN: &str = "MX85";

/// Connection parameters for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub base_url: Url,
    pub organization_id: String,
    pub api_key: SecretString,
    /// Request timeout. `None` relies on the transport's default.
    pub timeout: Option<Duration>,
}

/// Deployment defaults that shape what gets created and matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSettings {
    /// Timezone given to newly created networks.
    pub default_timezone: String,
    /// Model substring identifying a switch in the inventory.
    pub switch_model_pattern: String,
    /// Model substring identifying the security appliance in the inventory.
    pub appliance_model_pattern: String,
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.into(),
            switch_model_pattern: DEFAULT_SWITCH_MODEL_PATTERN.into(),
            appliance_model_pattern: DEFAULT_APPLIANCE_MODEL_PATTERN.into(),
        }
    }
}
