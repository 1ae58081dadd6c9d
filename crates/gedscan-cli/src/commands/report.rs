use crate::cli::Cli;
use crate::config::builder::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use gedscan::engine::progress::ProgressReporter;
use gedscan::workflows::report::{self, RunOutcome};
use tracing::{info, warn};

pub fn run(cli: &Cli) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(cli)?;

    let progress_handler = CliProgressHandler::new(!cli.quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the report workflow...");
    let outcome = report::run(&config, &reporter)?;

    match &outcome {
        RunOutcome::Dump { stats, rows_written } => {
            if stats.individuals == 0 {
                warn!("No individuals were found in {:?}.", &config.input_path);
            }
            info!(
                "Wrote {} individual(s) to {}",
                rows_written,
                config.output.path.display()
            );
        }
        RunOutcome::SurnameSearch { report, .. } => {
            info!(
                "Wrote {} incomplete record(s) to {}",
                report.incomplete.len(),
                config.output.path.display()
            );
        }
    }

    if let Some(summary) = outcome.summary() {
        println!("{}", summary);
    }
    Ok(())
}
