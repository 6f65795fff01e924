// ── Domain model ──
//
// Canonical types the orchestration works with, independent of the
// dashboard's wire format (see `convert` for the mapping).

use serde::Serialize;
use strum::{Display, EnumString};

/// Product types every provisioned network is created with.
pub const NETWORK_PRODUCT_TYPES: [&str; 2] = ["appliance", "switch"];

/// Name used when no network name is supplied and the organization is empty.
pub const DEFAULT_NETWORK_NAME: &str = "Automated Network";

/// A dashboard network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub timezone: Option<String>,
    pub product_types: Vec<String>,
}

/// A piece of hardware known to the organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub serial: String,
    pub model: String,
    pub name: Option<String>,
    pub address: Option<String>,
    /// Owning network, `None` while unassigned.
    pub network_id: Option<String>,
}

/// A configuration template. Only ever referenced, never created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigTemplate {
    pub id: String,
    pub name: String,
}

/// The two hardware classes that make up one deployment unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    #[strum(to_string = "Switch", serialize = "switch")]
    Switch,
    #[strum(to_string = "Security Appliance", serialize = "appliance")]
    SecurityAppliance,
}

/// Parameters for creating a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNetwork {
    pub name: String,
    pub product_types: Vec<String>,
    pub timezone: String,
    pub tags: Vec<String>,
}

/// Partial device update. `None` fields are left untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub move_map_marker: Option<bool>,
}

impl DeviceUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the street address and ask the dashboard to move the map marker.
    pub fn relocate(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            move_map_marker: Some(true),
            ..Self::default()
        }
    }
}

/// One run's worth of operator input.
#[derive(Debug, Clone, Default)]
pub struct DeploymentRequest {
    pub network_name: Option<String>,
    pub tags: Vec<String>,
    pub template: Option<String>,
    pub address: Option<String>,
    pub ignore_existing: bool,
    pub switch_serial: Option<String>,
    pub appliance_serial: Option<String>,
    pub dry_run: bool,
}

/// Split a comma-separated tag list, trimming blanks and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Display name given to a deployed device.
pub fn device_display_name(model: &str, serial: &str) -> String {
    format!("{model}_{serial}")
}
