//! Deployment orchestration between `mdeploy-api` and the `mdeploy` CLI.
//!
//! - **[`DashboardApi`]** — capability trait over the organization-scoped
//!   remote operations. [`Dashboard`] implements it over HTTP; tests plug in
//!   in-memory fakes.
//!
//! - **Stages** — [`resolve_network`], [`bind_template`], [`locate_devices`]
//!   and [`deploy_device`], each returning a typed `Result`.
//!
//! - **[`Orchestrator`]** — runs the stages in order for one
//!   [`DeploymentRequest`] and produces a [`DeploymentReport`].

pub mod config;
pub mod convert;
pub mod dashboard;
pub mod deployer;
pub mod error;
pub mod locator;
pub mod model;
pub mod orchestrator;
pub mod resolver;
pub mod template;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DashboardConfig, DeploymentSettings};
pub use dashboard::{Dashboard, DashboardApi};
pub use deployer::{DeployedDevice, deploy_device};
pub use error::CoreError;
pub use locator::{DevicePair, locate_devices, select_devices};
pub use model::{
    ConfigTemplate, DeploymentRequest, Device, DeviceClass, DeviceUpdate, Network, NewNetwork,
    parse_tags,
};
pub use orchestrator::{
    DevicePlan, DeploymentReport, Orchestrator, SerialSource, TemplateOutcome,
};
pub use resolver::{NetworkResolution, PlannedNetwork, resolve_network};
pub use template::bind_template;
