// ── Device deployment ──
//
// Claim → rename → relocate → verify. Renaming and relocation are cosmetic
// and only ever produce warnings. The claim call's success is not trusted:
// a device counts as deployed only once the network's device list shows it.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::dashboard::DashboardApi;
use crate::error::CoreError;
use crate::model::{DeviceClass, DeviceUpdate, device_display_name};

/// Result of a verified deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployedDevice {
    pub class: DeviceClass,
    pub serial: String,
    pub model: Option<String>,
    /// Display name set on the device, if renaming succeeded.
    pub name: Option<String>,
    /// Address set on the device, if relocation succeeded.
    pub address: Option<String>,
    /// Cosmetic steps that failed.
    pub warnings: Vec<String>,
}

/// Claim `serial` into `network_id`, name and geolocate it, then verify.
pub async fn deploy_device<A: DashboardApi>(
    api: &A,
    serial: &str,
    network_id: &str,
    class: DeviceClass,
    address: Option<&str>,
) -> Result<DeployedDevice, CoreError> {
    api.claim_devices(network_id, &[serial.to_owned()])
        .await
        .map_err(|e| {
            error!("Failed to deploy {class}: {e}");
            CoreError::ClaimFailed {
                class,
                serial: serial.into(),
                message: e.to_string(),
            }
        })?;
    info!(serial, network_id, "{class} {serial} deployment initiated.");

    let mut deployed = DeployedDevice {
        class,
        serial: serial.to_owned(),
        model: None,
        name: None,
        address: None,
        warnings: Vec::new(),
    };

    rename(api, &mut deployed).await;
    if let Some(address) = address {
        relocate(api, &mut deployed, address).await;
    }

    verify(api, &deployed, network_id).await?;
    Ok(deployed)
}

async fn rename<A: DashboardApi>(api: &A, deployed: &mut DeployedDevice) {
    let serial = deployed.serial.clone();
    let device = match api.get_device(&serial).await {
        Ok(device) => device,
        Err(e) => {
            warn!(serial, "Could not set device name: {e}");
            deployed.warnings.push(format!("name not set: {e}"));
            return;
        }
    };

    let name = device_display_name(&device.model, &serial);
    deployed.model = Some(device.model);
    match api.update_device(&serial, &DeviceUpdate::rename(&name)).await {
        Ok(()) => {
            info!(serial, "Device named as: {name}");
            deployed.name = Some(name);
        }
        Err(e) => {
            warn!(serial, "Could not set device name: {e}");
            deployed.warnings.push(format!("name not set: {e}"));
        }
    }
}

async fn relocate<A: DashboardApi>(api: &A, deployed: &mut DeployedDevice, address: &str) {
    let serial = deployed.serial.clone();
    match api
        .update_device(&serial, &DeviceUpdate::relocate(address))
        .await
    {
        Ok(()) => {
            info!(serial, "Device address set to: {address}");
            deployed.address = Some(address.to_owned());
        }
        Err(e) => {
            warn!(serial, "Could not set device address: {e}");
            deployed.warnings.push(format!("address not set: {e}"));
        }
    }
}

async fn verify<A: DashboardApi>(
    api: &A,
    deployed: &DeployedDevice,
    network_id: &str,
) -> Result<(), CoreError> {
    let class = deployed.class;
    let serial = deployed.serial.as_str();
    let devices = api.list_network_devices(network_id).await.inspect_err(|e| {
        error!("Failed to deploy {class}: {e}");
    })?;

    if devices.iter().any(|d| d.serial == serial) {
        info!(serial, "Verification Successful: {class} {serial} is now in the network.");
        Ok(())
    } else {
        error!(serial, "Verification Failed: {class} {serial} is NOT found in the network.");
        Err(CoreError::VerificationFailed {
            class,
            serial: serial.to_owned(),
            network_id: network_id.to_owned(),
        })
    }
}
