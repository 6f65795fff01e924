// ── Wire type → domain type conversions ──

use mdeploy_api::models::{
    ConfigTemplateResponse, CreateNetworkRequest, DeviceResponse, NetworkResponse,
    UpdateDeviceRequest,
};

use crate::model::{ConfigTemplate, Device, DeviceUpdate, Network, NewNetwork};

impl From<NetworkResponse> for Network {
    fn from(n: NetworkResponse) -> Self {
        Self {
            id: n.id,
            name: n.name,
            tags: n.tags,
            timezone: n.time_zone,
            product_types: n.product_types,
        }
    }
}

impl From<DeviceResponse> for Device {
    fn from(d: DeviceResponse) -> Self {
        Self {
            serial: d.serial,
            model: d.model,
            name: d.name.filter(|n| !n.is_empty()),
            address: d.address.filter(|a| !a.is_empty()),
            network_id: d.network_id,
        }
    }
}

impl From<ConfigTemplateResponse> for ConfigTemplate {
    fn from(t: ConfigTemplateResponse) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

impl From<&NewNetwork> for CreateNetworkRequest {
    fn from(n: &NewNetwork) -> Self {
        Self {
            name: n.name.clone(),
            product_types: n.product_types.clone(),
            time_zone: n.timezone.clone(),
            tags: n.tags.clone(),
        }
    }
}

impl From<&DeviceUpdate> for UpdateDeviceRequest {
    fn from(u: &DeviceUpdate) -> Self {
        Self {
            name: u.name.clone(),
            address: u.address.clone(),
            move_map_marker: u.move_map_marker,
        }
    }
}
