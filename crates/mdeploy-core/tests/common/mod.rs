// In-memory `DashboardApi` used by the orchestration tests.
//
// Holds one organization's networks, inventory and templates, records every
// call in order, and can be told to misbehave in the ways the deployment
// flow has to cope with.
#![allow(dead_code, clippy::unwrap_used)]

use std::sync::Mutex;

use mdeploy_core::{
    ConfigTemplate, CoreError, DashboardApi, Device, DeviceUpdate, Network, NewNetwork,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListNetworks,
    CreateNetwork(NewNetwork),
    ListDevices,
    GetDevice(String),
    UpdateDevice(String, DeviceUpdate),
    ClaimDevices(String, Vec<String>),
    ListNetworkDevices(String),
    ListConfigTemplates,
    BindNetwork(String, String),
}

impl Call {
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::CreateNetwork(_)
                | Self::UpdateDevice(..)
                | Self::ClaimDevices(..)
                | Self::BindNetwork(..)
        )
    }
}

#[derive(Default)]
struct State {
    networks: Vec<Network>,
    inventory: Vec<Device>,
    templates: Vec<ConfigTemplate>,
    bindings: Vec<(String, String)>,
    next_id: u32,
    fail_updates: bool,
    fail_claims: bool,
    claims_vanish: bool,
    fail_binds: bool,
}

#[derive(Default)]
pub struct FakeDashboard {
    state: Mutex<State>,
    calls: Mutex<Vec<Call>>,
}

impl FakeDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding ──────────────────────────────────────────────────────

    pub fn with_network(self, id: &str, name: &str) -> Self {
        self.state.lock().unwrap().networks.push(Network {
            id: id.into(),
            name: name.into(),
            tags: Vec::new(),
            timezone: Some("America/Los_Angeles".into()),
            product_types: vec!["appliance".into(), "switch".into()],
        });
        self
    }

    pub fn with_device(self, serial: &str, model: &str) -> Self {
        self.state.lock().unwrap().inventory.push(Device {
            serial: serial.into(),
            model: model.into(),
            name: None,
            address: None,
            network_id: None,
        });
        self
    }

    pub fn with_template(self, id: &str, name: &str) -> Self {
        self.state.lock().unwrap().templates.push(ConfigTemplate {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    // ── Fault injection ──────────────────────────────────────────────

    /// Every device update is rejected.
    pub fn failing_updates(self) -> Self {
        self.state.lock().unwrap().fail_updates = true;
        self
    }

    /// Every claim is rejected.
    pub fn failing_claims(self) -> Self {
        self.state.lock().unwrap().fail_claims = true;
        self
    }

    /// Claims report success but never land in the network.
    pub fn vanishing_claims(self) -> Self {
        self.state.lock().unwrap().claims_vanish = true;
        self
    }

    /// Every template bind is rejected.
    pub fn failing_binds(self) -> Self {
        self.state.lock().unwrap().fail_binds = true;
        self
    }

    // ── Inspection ───────────────────────────────────────────────────

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutating).collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(*c)).count()
    }

    pub fn network_count(&self) -> usize {
        self.state.lock().unwrap().networks.len()
    }

    pub fn device(&self, serial: &str) -> Option<Device> {
        self.state
            .lock()
            .unwrap()
            .inventory
            .iter()
            .find(|d| d.serial == serial)
            .cloned()
    }

    pub fn bindings(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().bindings.clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn rejected(message: &str) -> CoreError {
    CoreError::Api {
        message: message.into(),
        status: Some(400),
    }
}

impl DashboardApi for FakeDashboard {
    async fn list_networks(&self) -> Result<Vec<Network>, CoreError> {
        self.record(Call::ListNetworks);
        Ok(self.state.lock().unwrap().networks.clone())
    }

    async fn create_network(&self, network: &NewNetwork) -> Result<Network, CoreError> {
        self.record(Call::CreateNetwork(network.clone()));
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let created = Network {
            id: format!("N_{}", state.next_id),
            name: network.name.clone(),
            tags: network.tags.clone(),
            timezone: Some(network.timezone.clone()),
            product_types: network.product_types.clone(),
        };
        state.networks.push(created.clone());
        Ok(created)
    }

    async fn list_devices(&self) -> Result<Vec<Device>, CoreError> {
        self.record(Call::ListDevices);
        Ok(self.state.lock().unwrap().inventory.clone())
    }

    async fn get_device(&self, serial: &str) -> Result<Device, CoreError> {
        self.record(Call::GetDevice(serial.into()));
        self.device(serial).ok_or_else(|| CoreError::NotFound {
            path: format!("/devices/{serial}"),
        })
    }

    async fn update_device(&self, serial: &str, update: &DeviceUpdate) -> Result<(), CoreError> {
        self.record(Call::UpdateDevice(serial.into(), update.clone()));
        let mut state = self.state.lock().unwrap();
        if state.fail_updates {
            return Err(rejected("update rejected"));
        }
        let device = state
            .inventory
            .iter_mut()
            .find(|d| d.serial == serial)
            .ok_or_else(|| rejected("unknown serial"))?;
        if let Some(name) = &update.name {
            device.name = Some(name.clone());
        }
        if let Some(address) = &update.address {
            device.address = Some(address.clone());
        }
        Ok(())
    }

    async fn claim_devices(&self, network_id: &str, serials: &[String]) -> Result<(), CoreError> {
        self.record(Call::ClaimDevices(network_id.into(), serials.to_vec()));
        let mut state = self.state.lock().unwrap();
        if state.fail_claims {
            return Err(rejected("Device already claimed"));
        }
        if state.claims_vanish {
            return Ok(());
        }
        for serial in serials {
            let device = state
                .inventory
                .iter_mut()
                .find(|d| &d.serial == serial)
                .ok_or_else(|| rejected("unknown serial"))?;
            device.network_id = Some(network_id.into());
        }
        Ok(())
    }

    async fn list_network_devices(&self, network_id: &str) -> Result<Vec<Device>, CoreError> {
        self.record(Call::ListNetworkDevices(network_id.into()));
        Ok(self
            .state
            .lock()
            .unwrap()
            .inventory
            .iter()
            .filter(|d| d.network_id.as_deref() == Some(network_id))
            .cloned()
            .collect())
    }

    async fn list_config_templates(&self) -> Result<Vec<ConfigTemplate>, CoreError> {
        self.record(Call::ListConfigTemplates);
        Ok(self.state.lock().unwrap().templates.clone())
    }

    async fn bind_network(&self, network_id: &str, template_id: &str) -> Result<(), CoreError> {
        self.record(Call::BindNetwork(network_id.into(), template_id.into()));
        let mut state = self.state.lock().unwrap();
        if state.fail_binds {
            return Err(rejected("bind rejected"));
        }
        state.bindings.push((network_id.into(), template_id.into()));
        Ok(())
    }
}
