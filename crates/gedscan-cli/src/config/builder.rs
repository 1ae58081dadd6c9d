use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use gedscan::engine::config::{ReportMode, RunConfig, RunConfigBuilder};
use gedscan::engine::error::EngineError;

/// Merges CLI arguments, the optional config file and built-in defaults into a run configuration.
///
/// CLI arguments win over `--set` values, which win over the file, which wins over defaults.
pub fn build_config(cli: &Cli) -> Result<RunConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = file_config.apply_set_values(&cli.set_values)?;

    let output = cli
        .output
        .clone()
        .or(file_config.output)
        .unwrap_or_else(|| defaults.output.into());

    let delimiter = file_config.delimiter.unwrap_or(defaults.delimiter);
    if !delimiter.is_ascii() {
        return Err(CliError::Config(format!(
            "CSV delimiter must be a single ASCII character, got '{}'",
            delimiter
        )));
    }

    let mode = if cli.debug {
        ReportMode::Dump
    } else {
        let surname = cli.surname.clone().ok_or_else(|| {
            CliError::Config("A surname is required unless --debug is given".to_string())
        })?;
        ReportMode::SurnameSearch { surname }
    };

    let config = RunConfigBuilder::new()
        .input_path(cli.gedfile.clone())
        .output_path(output)
        .mode(mode)
        .xref_sentinel(file_config.xref_sentinel.unwrap_or(defaults.xref_sentinel))
        .delimiter(delimiter as u8)
        .build()
        .map_err(EngineError::from)?;
    Ok(config)
}
