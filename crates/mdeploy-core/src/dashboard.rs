// ── Dashboard capability surface ──
//
// `DashboardApi` is the set of remote operations the orchestration needs,
// scoped to a single organization. `Dashboard` implements it over HTTP;
// tests supply in-memory fakes.

use mdeploy_api::models::{CreateNetworkRequest, UpdateDeviceRequest};
use mdeploy_api::{DashboardClient, TransportConfig};
use tracing::debug;

use crate::config::DashboardConfig;
use crate::error::CoreError;
use crate::model::{ConfigTemplate, Device, DeviceUpdate, Network, NewNetwork};

/// Remote operations against one organization's dashboard.
///
/// Calls are issued one at a time by the orchestrator; implementations do
/// not need to be shareable across tasks.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn list_networks(&self) -> Result<Vec<Network>, CoreError>;

    async fn create_network(&self, network: &NewNetwork) -> Result<Network, CoreError>;

    /// Every device in the organization inventory.
    async fn list_devices(&self) -> Result<Vec<Device>, CoreError>;

    async fn get_device(&self, serial: &str) -> Result<Device, CoreError>;

    async fn update_device(&self, serial: &str, update: &DeviceUpdate) -> Result<(), CoreError>;

    async fn claim_devices(&self, network_id: &str, serials: &[String]) -> Result<(), CoreError>;

    async fn list_network_devices(&self, network_id: &str) -> Result<Vec<Device>, CoreError>;

    async fn list_config_templates(&self) -> Result<Vec<ConfigTemplate>, CoreError>;

    async fn bind_network(&self, network_id: &str, template_id: &str) -> Result<(), CoreError>;
}

/// Live dashboard handle: one authenticated client plus the organization id.
pub struct Dashboard {
    client: DashboardClient,
    organization_id: String,
}

impl Dashboard {
    /// Build the authenticated HTTP client from configuration.
    pub fn connect(config: &DashboardConfig) -> Result<Self, CoreError> {
        let mut transport = TransportConfig::default();
        if let Some(timeout) = config.timeout {
            transport = transport.with_timeout(timeout);
        }
        let client =
            DashboardClient::from_api_key(config.base_url.as_str(), &config.api_key, &transport)?;
        debug!(base_url = %client.base_url(), "dashboard client ready");
        Ok(Self::new(client, config.organization_id.clone()))
    }

    /// Wrap an already-built client.
    pub fn new(client: DashboardClient, organization_id: String) -> Self {
        Self {
            client,
            organization_id,
        }
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }
}

impl DashboardApi for Dashboard {
    async fn list_networks(&self) -> Result<Vec<Network>, CoreError> {
        let networks = self.client.list_networks(&self.organization_id).await?;
        Ok(networks.into_iter().map(Network::from).collect())
    }

    async fn create_network(&self, network: &NewNetwork) -> Result<Network, CoreError> {
        let request = CreateNetworkRequest::from(network);
        let created = self
            .client
            .create_network(&self.organization_id, &request)
            .await?;
        Ok(created.into())
    }

    async fn list_devices(&self) -> Result<Vec<Device>, CoreError> {
        let devices = self
            .client
            .list_organization_devices(&self.organization_id)
            .await?;
        Ok(devices.into_iter().map(Device::from).collect())
    }

    async fn get_device(&self, serial: &str) -> Result<Device, CoreError> {
        Ok(self.client.get_device(serial).await?.into())
    }

    async fn update_device(&self, serial: &str, update: &DeviceUpdate) -> Result<(), CoreError> {
        let request = UpdateDeviceRequest::from(update);
        self.client.update_device(serial, &request).await?;
        Ok(())
    }

    async fn claim_devices(&self, network_id: &str, serials: &[String]) -> Result<(), CoreError> {
        Ok(self.client.claim_network_devices(network_id, serials).await?)
    }

    async fn list_network_devices(&self, network_id: &str) -> Result<Vec<Device>, CoreError> {
        let devices = self.client.list_network_devices(network_id).await?;
        Ok(devices.into_iter().map(Device::from).collect())
    }

    async fn list_config_templates(&self) -> Result<Vec<ConfigTemplate>, CoreError> {
        let templates = self
            .client
            .list_config_templates(&self.organization_id)
            .await?;
        Ok(templates.into_iter().map(ConfigTemplate::from).collect())
    }

    async fn bind_network(&self, network_id: &str, template_id: &str) -> Result<(), CoreError> {
        Ok(self.client.bind_network(network_id, template_id).await?)
    }
}
