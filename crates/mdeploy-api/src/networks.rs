// Network-scoped endpoints: claim, device listing, template binding.

use tracing::debug;

use crate::client::DashboardClient;
use crate::error::Error;
use crate::models::{BindNetworkRequest, ClaimDevicesRequest, DeviceResponse};

impl DashboardClient {
    /// Claim devices into a network.
    ///
    /// `POST /networks/{networkId}/devices/claim`
    pub async fn claim_network_devices(
        &self,
        network_id: &str,
        serials: &[String],
    ) -> Result<(), Error> {
        debug!(network_id, ?serials, "claiming devices");
        let body = ClaimDevicesRequest {
            serials: serials.to_vec(),
        };
        self.post_no_response(&["networks", network_id, "devices", "claim"], &body)
            .await
    }

    /// List the devices currently in a network.
    ///
    /// `GET /networks/{networkId}/devices`
    pub async fn list_network_devices(&self, network_id: &str) -> Result<Vec<DeviceResponse>, Error> {
        debug!(network_id, "listing network devices");
        self.get(&["networks", network_id, "devices"]).await
    }

    /// Bind a network to a configuration template.
    ///
    /// `POST /networks/{networkId}/bind`
    pub async fn bind_network(&self, network_id: &str, config_template_id: &str) -> Result<(), Error> {
        debug!(network_id, config_template_id, "binding network to template");
        let body = BindNetworkRequest {
            config_template_id: config_template_id.to_owned(),
            auto_bind: false,
        };
        self.post_no_response(&["networks", network_id, "bind"], &body)
            .await
    }
}
