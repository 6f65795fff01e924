// ── Network resolution ──
//
// Finds the target network by name or creates it. An existing name is only
// reused when the operator explicitly opts in; in dry-run nothing is created
// and the network that would be created is returned as a plan.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::DeploymentSettings;
use crate::dashboard::DashboardApi;
use crate::error::CoreError;
use crate::model::{DEFAULT_NETWORK_NAME, NETWORK_PRODUCT_TYPES, Network, NewNetwork};

/// Outcome of network resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NetworkResolution {
    /// An existing network was selected.
    Existing(Network),
    /// A new network was created during this run.
    Created(Network),
    /// Dry-run: this network would have been created.
    Planned(PlannedNetwork),
}

/// A network that resolution would create outside of dry-run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedNetwork {
    pub name: String,
    pub tags: Vec<String>,
    pub timezone: String,
}

impl NetworkResolution {
    /// Identifier of the resolved network; `None` for a dry-run plan.
    pub fn network_id(&self) -> Option<&str> {
        match self {
            Self::Existing(n) | Self::Created(n) => Some(&n.id),
            Self::Planned(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Existing(n) | Self::Created(n) => &n.name,
            Self::Planned(p) => &p.name,
        }
    }
}

/// Resolve the run's target network.
///
/// - `name` given and taken: reuse only with `ignore_existing`, else
///   [`CoreError::NetworkExists`].
/// - `name` given and free: create it.
/// - no `name`: first listed network, or create [`DEFAULT_NETWORK_NAME`].
///
/// Issues at most one create call, and none when `dry_run` is set.
pub async fn resolve_network<A: DashboardApi>(
    api: &A,
    settings: &DeploymentSettings,
    name: Option<&str>,
    tags: &[String],
    ignore_existing: bool,
    dry_run: bool,
) -> Result<NetworkResolution, CoreError> {
    let networks = api.list_networks().await.inspect_err(|e| {
        error!("Error listing networks: {e}");
    })?;

    let target = match name {
        Some(name) => {
            if let Some(existing) = networks.into_iter().find(|n| n.name == name) {
                if !ignore_existing {
                    warn!("Network '{name}' already exists. Use --ignore-existing to use it.");
                    return Err(CoreError::NetworkExists { name: name.into() });
                }
                info!(network_id = %existing.id, "Using existing network: {} ({})", existing.id, existing.name);
                return Ok(NetworkResolution::Existing(existing));
            }
            name
        }
        None => {
            if let Some(first) = networks.into_iter().next() {
                info!(network_id = %first.id, "Using existing network: {} ({})", first.id, first.name);
                return Ok(NetworkResolution::Existing(first));
            }
            DEFAULT_NETWORK_NAME
        }
    };

    let new_network = NewNetwork {
        name: target.to_owned(),
        product_types: NETWORK_PRODUCT_TYPES.iter().map(|p| (*p).to_owned()).collect(),
        timezone: settings.default_timezone.clone(),
        tags: tags.to_vec(),
    };

    if dry_run {
        info!("Would create network '{}' with tags {:?}", new_network.name, new_network.tags);
        return Ok(NetworkResolution::Planned(PlannedNetwork {
            name: new_network.name,
            tags: new_network.tags,
            timezone: new_network.timezone,
        }));
    }

    let created = api.create_network(&new_network).await.inspect_err(|e| {
        error!("Error creating network '{}': {e}", new_network.name);
    })?;
    info!(network_id = %created.id, "Created network: {} ({})", created.id, created.name);
    Ok(NetworkResolution::Created(created))
}
