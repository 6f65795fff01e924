// mdeploy-api: Async Rust client for the Meraki Dashboard API (v1)
//
// Covers the provisioning subset: organization networks, inventory and
// config templates, network claim/bind, and per-device reads and updates.

pub mod client;
pub mod devices;
pub mod error;
pub mod models;
pub mod networks;
pub mod organizations;
pub mod transport;

pub use client::DashboardClient;
pub use error::Error;
pub use transport::TransportConfig;
