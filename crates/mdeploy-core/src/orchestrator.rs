// ── Deployment orchestration ──
//
// resolve-network → [bind-template?] → [locate | explicit serials]
//                 → [dry-run: report | deploy switch → deploy appliance]
//
// Strictly linear: the first error ends the run and is returned to the
// caller. Template binding is the one stage whose failure is absorbed.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::DeploymentSettings;
use crate::dashboard::DashboardApi;
use crate::deployer::{DeployedDevice, deploy_device};
use crate::error::CoreError;
use crate::locator::{DevicePair, locate_devices};
use crate::model::{DeploymentRequest, DeviceClass};
use crate::resolver::{NetworkResolution, resolve_network};
use crate::template::bind_template;

/// What happened to the requested template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TemplateOutcome {
    NotRequested,
    Bound { name: String, template_id: String },
    /// Dry-run: binding would have been attempted.
    Planned { name: String },
    /// Binding failed; the run continued without it.
    Failed { name: String, reason: String },
}

/// Where the deployed serials came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SerialSource {
    Explicit,
    Detected,
}

/// One device slot of the deployment unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevicePlan {
    pub class: DeviceClass,
    pub serial: String,
    pub source: SerialSource,
}

/// Summary of a completed run (or of what a dry-run would do).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentReport {
    pub dry_run: bool,
    pub network: NetworkResolution,
    pub template: TemplateOutcome,
    pub address: Option<String>,
    pub planned: Vec<DevicePlan>,
    /// Verified deployments. Empty for dry-runs.
    pub deployed: Vec<DeployedDevice>,
}

/// Sequences the deployment stages against one dashboard.
pub struct Orchestrator<'a, A> {
    api: &'a A,
    settings: &'a DeploymentSettings,
}

impl<'a, A: DashboardApi> Orchestrator<'a, A> {
    pub fn new(api: &'a A, settings: &'a DeploymentSettings) -> Self {
        Self { api, settings }
    }

    /// Execute one deployment request.
    pub async fn run(&self, request: &DeploymentRequest) -> Result<DeploymentReport, CoreError> {
        info!(dry_run = request.dry_run, "Starting Meraki Deployment...");

        let network = resolve_network(
            self.api,
            self.settings,
            request.network_name.as_deref(),
            &request.tags,
            request.ignore_existing,
            request.dry_run,
        )
        .await?;

        let template = self.bind(request, &network).await;
        let planned = self.plan_devices(request).await?;

        let mut report = DeploymentReport {
            dry_run: request.dry_run,
            network,
            template,
            address: request.address.clone(),
            planned,
            deployed: Vec::new(),
        };

        if request.dry_run {
            log_dry_run(&report);
            return Ok(report);
        }

        // Non-dry-run resolution always yields an id.
        let network_id = report
            .network
            .network_id()
            .map(str::to_owned)
            .ok_or_else(|| CoreError::Config {
                message: "network resolution produced no identifier".into(),
            })?;

        for plan in &report.planned {
            let deployed = deploy_device(
                self.api,
                &plan.serial,
                &network_id,
                plan.class,
                request.address.as_deref(),
            )
            .await?;
            report.deployed.push(deployed);
        }

        info!("Deployment completed successfully!");
        Ok(report)
    }

    async fn bind(&self, request: &DeploymentRequest, network: &NetworkResolution) -> TemplateOutcome {
        let Some(name) = request.template.clone() else {
            return TemplateOutcome::NotRequested;
        };
        if request.dry_run {
            return TemplateOutcome::Planned { name };
        }
        let Some(network_id) = network.network_id() else {
            return TemplateOutcome::Planned { name };
        };

        match bind_template(self.api, network_id, &name).await {
            Ok(template) => TemplateOutcome::Bound {
                name,
                template_id: template.id,
            },
            Err(e) => {
                warn!("Continuing deployment without template binding.");
                TemplateOutcome::Failed {
                    name,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Both serials explicit: no inventory lookup. Otherwise the locator
    /// searches the inventory only for the class the operator left open.
    async fn plan_devices(&self, request: &DeploymentRequest) -> Result<Vec<DevicePlan>, CoreError> {
        let explicit_switch = request.switch_serial.as_deref();
        let explicit_appliance = request.appliance_serial.as_deref();
        let DevicePair { switch, appliance } = match (explicit_switch, explicit_appliance) {
            (Some(switch), Some(appliance)) => {
                info!("Using provided device serials: Switch={switch}, Appliance={appliance}");
                DevicePair {
                    switch: switch.to_owned(),
                    appliance: appliance.to_owned(),
                }
            }
            (switch, appliance) => {
                locate_devices(self.api, self.settings, switch, appliance).await?
            }
        };

        Ok(vec![
            DevicePlan {
                class: DeviceClass::Switch,
                serial: switch,
                source: source_of(explicit_switch),
            },
            DevicePlan {
                class: DeviceClass::SecurityAppliance,
                serial: appliance,
                source: source_of(explicit_appliance),
            },
        ])
    }
}

fn source_of(explicit: Option<&str>) -> SerialSource {
    if explicit.is_some() {
        SerialSource::Explicit
    } else {
        SerialSource::Detected
    }
}

fn log_dry_run(report: &DeploymentReport) {
    info!("Dry-run mode enabled. No actual changes were made.");
    let serial = |class: DeviceClass| {
        report
            .planned
            .iter()
            .find(|p| p.class == class)
            .map_or_else(|| "-".to_owned(), |p| p.serial.clone())
    };
    let target = report
        .network
        .network_id()
        .unwrap_or_else(|| report.network.name());
    info!(
        "Would deploy switch {} and appliance {} to network {target}",
        serial(DeviceClass::Switch),
        serial(DeviceClass::SecurityAppliance),
    );
    if let TemplateOutcome::Planned { name } = &report.template {
        info!("Would bind network to template '{name}'");
    }
    if let Some(address) = &report.address {
        info!("Would set device address to '{address}'");
    }
}
