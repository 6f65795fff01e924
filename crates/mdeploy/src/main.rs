mod cli;
mod error;
mod logging;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing::{debug, info};

use mdeploy_core::{Dashboard, DeploymentReport, Orchestrator};

use crate::cli::Cli;
use crate::error::{CliError, exit_code};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let (guard, log_path) = match logging::init(cli.verbose, &cli.log_dir) {
        Ok(init) => init,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(code);
        }
    };
    debug!(log_file = %log_path.display(), "logging initialized");

    let code = match run(&cli).await {
        Ok(()) => exit_code::SUCCESS,
        Err(err) => {
            debug!(error = %err, "run failed");
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    };

    // `process::exit` skips destructors; flush the log file first.
    drop(guard);
    std::process::exit(code);
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = mdeploy_config::load(&cli.config)?;
    let mut dashboard_config = config.dashboard;
    if let Some(secs) = cli.timeout {
        dashboard_config.timeout = Some(Duration::from_secs(secs));
    }

    let dashboard = Dashboard::connect(&dashboard_config)?;
    info!(
        organization_id = dashboard.organization_id(),
        "Using dashboard at {}", dashboard_config.base_url
    );

    let request = cli.deployment_request();
    debug!(?request, "deployment request");
    let report: DeploymentReport = Orchestrator::new(&dashboard, &config.deployment)
        .run(&request)
        .await?;

    let rendered = output::render_report(&report, cli.output, output::should_color(cli.color))?;
    output::print_output(&rendered);
    Ok(())
}
