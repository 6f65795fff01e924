// Device endpoints, addressed by serial number.

use tracing::debug;

use crate::client::DashboardClient;
use crate::error::Error;
use crate::models::{DeviceResponse, UpdateDeviceRequest};

impl DashboardClient {
    /// Fetch a single device.
    ///
    /// `GET /devices/{serial}`
    pub async fn get_device(&self, serial: &str) -> Result<DeviceResponse, Error> {
        self.get(&["devices", serial]).await
    }

    /// Update a device's attributes (name, address, map marker).
    ///
    /// `PUT /devices/{serial}`
    pub async fn update_device(
        &self,
        serial: &str,
        request: &UpdateDeviceRequest,
    ) -> Result<DeviceResponse, Error> {
        debug!(serial, ?request, "updating device");
        self.put(&["devices", serial], request).await
    }
}
