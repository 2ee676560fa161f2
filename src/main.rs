use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use kml_extract::{Cli, ConfigManager, ExtractError, Output};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Logs go to stderr; stdout carries the status lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let output = Output::new(cli.verbosity());

    match run(&cli) {
        Ok(report) => {
            output.report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "extraction failed");
            output.report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<kml_extract::RunReport, ExtractError> {
    let config = ConfigManager::load_config(cli)?;
    debug!(?config, "configuration loaded");
    kml_extract::run(&config)
}
