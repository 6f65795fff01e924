// ── Device location ──
//
// Picks one switch and one security appliance out of the organization
// inventory by model substring, first match per class.

use serde::Serialize;
use tracing::{error, info};

use crate::config::DeploymentSettings;
use crate::dashboard::DashboardApi;
use crate::error::CoreError;
use crate::model::{Device, DeviceClass};

/// The serials making up one deployment unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevicePair {
    pub switch: String,
    pub appliance: String,
}

/// Fetch the inventory and fill whichever slots the operator left open.
///
/// `switch` and `appliance` are serials already supplied for that class;
/// only the classes still empty are matched against the inventory.
pub async fn locate_devices<A: DashboardApi>(
    api: &A,
    settings: &DeploymentSettings,
    switch: Option<&str>,
    appliance: Option<&str>,
) -> Result<DevicePair, CoreError> {
    let devices = api.list_devices().await.inspect_err(|e| {
        error!("Error retrieving devices: {e}");
    })?;
    let pair = select_devices(&devices, settings, switch, appliance)
        .inspect_err(|e| error!("{e}"))?;
    info!(
        "Found devices: Switch={}, Appliance={}",
        pair.switch, pair.appliance
    );
    Ok(pair)
}

/// First-match selection over an inventory listing.
///
/// A device fills the switch slot if it matches the switch pattern and the
/// slot is still empty; otherwise it is considered for the appliance slot.
/// Slots pre-filled by the caller are never matched or reported missing.
pub fn select_devices<'a>(
    devices: &'a [Device],
    settings: &DeploymentSettings,
    mut switch: Option<&'a str>,
    mut appliance: Option<&'a str>,
) -> Result<DevicePair, CoreError> {
    for device in devices {
        if switch.is_some() && appliance.is_some() {
            break;
        }
        if switch.is_none() && device.model.contains(&settings.switch_model_pattern) {
            switch = Some(device.serial.as_str());
        } else if appliance.is_none() && device.model.contains(&settings.appliance_model_pattern)
        {
            appliance = Some(device.serial.as_str());
        }
    }

    match (switch, appliance) {
        (Some(switch), Some(appliance)) => Ok(DevicePair {
            switch: switch.to_owned(),
            appliance: appliance.to_owned(),
        }),
        (switch, appliance) => {
            let mut missing = Vec::new();
            if switch.is_none() {
                missing.push(DeviceClass::Switch);
            }
            if appliance.is_none() {
                missing.push(DeviceClass::SecurityAppliance);
            }
            Err(CoreError::DevicesNotFound { missing })
        }
    }
}
