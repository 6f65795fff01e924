//! Integration tests for the `mdeploy` binary.
//!
//! Argument parsing, configuration failures and exit codes run without any
//! network. The end-to-end cases point the binary at a wiremock dashboard.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `mdeploy` binary with env isolation, running
/// inside `dir` with logs written under `dir/logs`.
fn mdeploy_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mdeploy");
    cmd.current_dir(dir)
        .env_remove("MERAKI_API_KEY")
        .env_remove("MDEPLOY_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--log-dir")
        .arg(dir.join("logs"));
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn write_config(dir: &Path, body: &Value) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, serde_json::to_string_pretty(body).unwrap()).unwrap();
    path
}

fn dashboard_config(dir: &Path, server: &MockServer) -> PathBuf {
    write_config(
        dir,
        &json!({
            "dashboard_api_base_url": format!("{}/api/v1", server.uri()),
            "organization_id": "org-1",
            "meraki_api_key": "test-key"
        }),
    )
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run_blocking(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn mount_inventory(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/org-1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"serial": "Q2MR-0001", "model": "MR46"},
            {"serial": "Q2SW-0001", "model": "MS120-8"},
            {"serial": "Q2MX-0001", "model": "MX85"}
        ])))
        .mount(server)
        .await;
}

async fn forbid_mutations(server: &MockServer) {
    for verb in ["POST", "PUT"] {
        Mock::given(method(verb))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    mdeploy_cmd(dir.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("--dry-run")
            .and(predicate::str::contains("--network-name"))
            .and(predicate::str::contains("--ignore-existing"))
            .and(predicate::str::contains("--switch-serial"))
            .and(predicate::str::contains("--appliance-serial")),
    );
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    mdeploy_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdeploy"));
}

#[test]
fn test_unknown_output_format_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = mdeploy_cmd(dir.path())
        .args(["--output", "yaml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Configuration failures ──────────────────────────────────────────

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let output = mdeploy_cmd(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(4));
    let text = combined_output(&output);
    assert!(
        text.contains("Configuration file not found"),
        "Expected missing-config message:\n{text}"
    );
}

#[test]
fn test_missing_api_key() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), &json!({"organization_id": "org-1"}));

    let output = mdeploy_cmd(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    let text = combined_output(&output);
    assert!(text.contains("No API key configured"), "got:\n{text}");
}

#[test]
fn test_missing_organization() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), &json!({"meraki_api_key": "k"}));

    let output = mdeploy_cmd(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("organization_id"));
}

#[test]
fn test_config_flag_selects_file() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("other.json");
    std::fs::write(&other, r#"{"organization_id": "org-1"}"#).unwrap();

    // Found via --config, then fails on the missing key rather than the file.
    let output = mdeploy_cmd(dir.path())
        .arg("--config")
        .arg(&other)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

// ── End-to-end against a mocked dashboard ───────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_dry_run_makes_no_changes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/org-1/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    mount_inventory(&server).await;
    forbid_mutations(&server).await;

    let dir = TempDir::new().unwrap();
    dashboard_config(dir.path(), &server);

    let mut cmd = mdeploy_cmd(dir.path());
    cmd.args([
        "--dry-run",
        "--network-name",
        "Branch-12",
        "--tags",
        "retail,west",
        "--template",
        "HQ-Template",
        "--output",
        "json",
    ]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(0), "{}", combined_output(&output));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["network"]["status"], "planned");
    assert_eq!(report["network"]["tags"], json!(["retail", "west"]));
    assert_eq!(report["template"]["status"], "planned");
    assert_eq!(report["planned"][0]["serial"], "Q2SW-0001");
    assert_eq!(report["planned"][1]["serial"], "Q2MX-0001");
    assert_eq!(report["deployed"], json!([]));

    let logs: Vec<_> = std::fs::read_dir(dir.path().join("logs"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(logs.len(), 1, "one log file per run: {logs:?}");
    assert!(logs[0].starts_with("meraki_deployment_") && logs[0].ends_with(".log"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_existing_network_is_a_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/org-1/networks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "N_7", "name": "Branch-12"}])),
        )
        .mount(&server)
        .await;
    forbid_mutations(&server).await;

    let dir = TempDir::new().unwrap();
    dashboard_config(dir.path(), &server);

    let mut cmd = mdeploy_cmd(dir.path());
    cmd.args(["--network-name", "Branch-12"]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(6));
    let text = combined_output(&output);
    assert!(text.contains("already exists"), "got:\n{text}");
    assert!(text.contains("ignore"), "help text missing:\n{text}");

    // The failure is logged once, where it happened.
    let log_dir = dir.path().join("logs");
    let log_file = std::fs::read_dir(&log_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let log = std::fs::read_to_string(log_file).unwrap();
    assert_eq!(log.matches("already exists").count(), 1, "log:\n{log}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_deployment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/org-1/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/organizations/org-1/networks"))
        .and(body_json(json!({
            "name": "Branch-12",
            "productTypes": ["appliance", "switch"],
            "timeZone": "America/Los_Angeles",
            "tags": ["retail", "west"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "N_1",
            "name": "Branch-12",
            "productTypes": ["appliance", "switch"],
            "timeZone": "America/Los_Angeles",
            "tags": ["retail", "west"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_inventory(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/networks/N_1/devices/claim"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;
    for (serial, model) in [("Q2SW-0001", "MS120-8"), ("Q2MX-0001", "MX85")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/devices/{serial}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"serial": serial, "model": model})),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/v1/devices/{serial}")))
            .and(body_json(json!({"name": format!("{model}_{serial}")})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"serial": serial, "model": model})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/v1/networks/N_1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"serial": "Q2SW-0001", "model": "MS120-8", "networkId": "N_1"},
            {"serial": "Q2MX-0001", "model": "MX85", "networkId": "N_1"}
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    dashboard_config(dir.path(), &server);

    let mut cmd = mdeploy_cmd(dir.path());
    cmd.args([
        "--network-name",
        "Branch-12",
        "--tags",
        "retail,west",
        "--output",
        "json",
    ]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(0), "{}", combined_output(&output));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["network"]["status"], "created");
    assert_eq!(report["network"]["id"], "N_1");
    assert_eq!(report["deployed"][0]["name"], "MS120-8_Q2SW-0001");
    assert_eq!(report["deployed"][1]["name"], "MX85_Q2MX-0001");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unverified_claim_exits_with_verification_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/org-1/networks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "N_7", "name": "Branch-12"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/networks/N_7/devices/claim"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/devices/ABC-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"serial": "ABC-1", "model": "MS390"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/devices/ABC-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"serial": "ABC-1", "model": "MS390"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/networks/N_7/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/org-1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    dashboard_config(dir.path(), &server);

    let mut cmd = mdeploy_cmd(dir.path());
    cmd.args([
        "--network-name",
        "Branch-12",
        "--ignore-existing",
        "--switch-serial",
        "ABC-1",
        "--appliance-serial",
        "XYZ-2",
    ]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(9), "{}", combined_output(&output));
}
