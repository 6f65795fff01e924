//! Run summary rendering: table or JSON.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use mdeploy_core::{DeploymentReport, NetworkResolution, SerialSource, TemplateOutcome};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Source")]
    source: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Render the report in the chosen format.
pub fn render_report(
    report: &DeploymentReport,
    format: OutputFormat,
    color: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(report, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn paint(text: String, color: bool, f: impl Fn(&str) -> String) -> String {
    if color { f(&text) } else { text }
}

fn render_table(report: &DeploymentReport, color: bool) -> String {
    let mut out = String::new();

    let network = match &report.network {
        NetworkResolution::Existing(n) => format!("{} ({}, existing)", n.name, n.id),
        NetworkResolution::Created(n) => format!("{} ({}, created)", n.name, n.id),
        NetworkResolution::Planned(p) => format!("{} (would be created)", p.name),
    };
    out.push_str(&format!("Network:  {network}\n"));

    let template = match &report.template {
        TemplateOutcome::NotRequested => "-".to_owned(),
        TemplateOutcome::Bound { name, template_id } => format!("{name} ({template_id}, bound)"),
        TemplateOutcome::Planned { name } => format!("{name} (would be bound)"),
        TemplateOutcome::Failed { name, reason } => paint(
            format!("{name} (not bound: {reason})"),
            color,
            |s| s.yellow().to_string(),
        ),
    };
    out.push_str(&format!("Template: {template}\n"));

    let rows: Vec<DeviceRow> = report
        .planned
        .iter()
        .map(|plan| {
            let deployed = report.deployed.iter().find(|d| d.serial == plan.serial);
            let status = match deployed {
                Some(d) if d.warnings.is_empty() => {
                    paint("verified".into(), color, |s| s.green().to_string())
                }
                Some(d) => paint(
                    format!("verified ({})", d.warnings.join("; ")),
                    color,
                    |s| s.yellow().to_string(),
                ),
                None if report.dry_run => "planned".to_owned(),
                None => paint("not deployed".into(), color, |s| s.red().to_string()),
            };
            DeviceRow {
                class: plan.class.to_string(),
                serial: plan.serial.clone(),
                source: match plan.source {
                    SerialSource::Explicit => "explicit",
                    SerialSource::Detected => "detected",
                },
                name: deployed
                    .and_then(|d| d.name.clone())
                    .unwrap_or_else(|| "-".into()),
                address: deployed
                    .map_or_else(|| report.address.clone(), |d| d.address.clone())
                    .unwrap_or_else(|| "-".into()),
                status,
            }
        })
        .collect();

    out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    if report.dry_run {
        out.push_str("\nDry-run: no changes were made.");
    }
    out
}
