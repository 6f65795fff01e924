// Dashboard API wire types.
//
// Field names follow the dashboard's camelCase JSON. Optional fields are
// defaulted because the dashboard omits or nulls them depending on product.

use serde::{Deserialize, Serialize};

// ── Networks ─────────────────────────────────────────────────────────

/// A network as returned by `GET /organizations/{id}/networks`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponse {
    pub id: String,
    #[serde(default)]
    pub organization_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub product_types: Vec<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_bound_to_config_template: bool,
    #[serde(default)]
    pub config_template_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body for `POST /organizations/{id}/networks`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkRequest {
    pub name: String,
    pub product_types: Vec<String>,
    pub time_zone: String,
    pub tags: Vec<String>,
}

/// Body for `POST /networks/{id}/devices/claim`.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimDevicesRequest {
    pub serials: Vec<String>,
}

/// Body for `POST /networks/{id}/bind`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindNetworkRequest {
    pub config_template_id: String,
    pub auto_bind: bool,
}

// ── Devices ──────────────────────────────────────────────────────────

/// A device from the organization inventory, a network's device list,
/// or `GET /devices/{serial}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub serial: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub firmware: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body for `PUT /devices/{serial}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_map_marker: Option<bool>,
}

// ── Config templates ────────────────────────────────────────────────

/// A configuration template from `GET /organizations/{id}/configTemplates`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigTemplateResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_types: Vec<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}
