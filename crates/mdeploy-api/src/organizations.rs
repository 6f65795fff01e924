// Organization-scoped endpoints: networks, inventory, config templates.

use tracing::debug;

use crate::client::DashboardClient;
use crate::error::Error;
use crate::models::{ConfigTemplateResponse, CreateNetworkRequest, DeviceResponse, NetworkResponse};

impl DashboardClient {
    /// List the organization's networks.
    ///
    /// `GET /organizations/{organizationId}/networks`
    pub async fn list_networks(&self, organization_id: &str) -> Result<Vec<NetworkResponse>, Error> {
        debug!(organization_id, "listing networks");
        self.get(&["organizations", organization_id, "networks"])
            .await
    }

    /// Create a network in the organization.
    ///
    /// `POST /organizations/{organizationId}/networks`
    pub async fn create_network(
        &self,
        organization_id: &str,
        request: &CreateNetworkRequest,
    ) -> Result<NetworkResponse, Error> {
        debug!(organization_id, name = %request.name, "creating network");
        self.post(&["organizations", organization_id, "networks"], request)
            .await
    }

    /// List every device in the organization's inventory.
    ///
    /// `GET /organizations/{organizationId}/devices`
    pub async fn list_organization_devices(
        &self,
        organization_id: &str,
    ) -> Result<Vec<DeviceResponse>, Error> {
        debug!(organization_id, "listing organization devices");
        self.get(&["organizations", organization_id, "devices"])
            .await
    }

    /// List the organization's configuration templates.
    ///
    /// `GET /organizations/{organizationId}/configTemplates`
    pub async fn list_config_templates(
        &self,
        organization_id: &str,
    ) -> Result<Vec<ConfigTemplateResponse>, Error> {
        debug!(organization_id, "listing config templates");
        self.get(&["organizations", organization_id, "configTemplates"])
            .await
    }
}
