//! Clap derive structures for the `mdeploy` CLI.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use mdeploy_core::{DeploymentRequest, parse_tags};

/// mdeploy -- provision a Meraki branch in one run
#[derive(Debug, Parser)]
#[command(
    name = "mdeploy",
    version,
    about = "Provision a Meraki network with a switch and a security appliance",
    long_about = "Finds or creates a network, optionally binds it to a configuration \
        template, claims one switch and one security appliance into it, names and \
        geolocates them, and verifies the result."
)]
pub struct Cli {
    // ── Deployment ───────────────────────────────────────────────────
    /// Show what would be done without creating, claiming, binding or updating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Name of the network to create or reuse
    #[arg(long, value_name = "NAME")]
    pub network_name: Option<String>,

    /// Comma-separated tags for a newly created network
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Name of the configuration template to bind the network to
    #[arg(long, value_name = "NAME")]
    pub template: Option<String>,

    /// Street address to set on the deployed devices
    #[arg(long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Reuse a network whose name already exists instead of stopping
    #[arg(long)]
    pub ignore_existing: bool,

    /// Serial of the switch to deploy (the inventory is then searched for the appliance only)
    #[arg(long, value_name = "SERIAL")]
    pub switch_serial: Option<String>,

    /// Serial of the security appliance to deploy (the inventory is then searched for the switch only)
    #[arg(long, value_name = "SERIAL")]
    pub appliance_serial: Option<String>,

    // ── Runtime ──────────────────────────────────────────────────────
    /// Configuration file
    #[arg(
        long,
        short = 'c',
        env = "MDEPLOY_CONFIG",
        default_value = mdeploy_config::DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Directory for the per-run log file
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub log_dir: PathBuf,

    /// Request timeout in seconds (overrides the configuration file)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format for the run summary
    #[arg(long, short = 'o', default_value = "table")]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default)
    Table,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl Cli {
    /// The operator's request for this run.
    pub fn deployment_request(&self) -> DeploymentRequest {
        DeploymentRequest {
            network_name: self.network_name.clone(),
            tags: self.tags.as_deref().map(parse_tags).unwrap_or_default(),
            template: self.template.clone(),
            address: self.address.clone(),
            ignore_existing: self.ignore_existing,
            switch_serial: self.switch_serial.clone(),
            appliance_serial: self.appliance_serial.clone(),
            dry_run: self.dry_run,
        }
    }
}
