use super::{dump, search};
use crate::core::io::gedcom::{GedcomFile, ParseStats};
use crate::core::io::report::{CsvSink, ReportError, ReportRow, write_report};
use crate::core::io::traits::GenealogyFile;
use crate::engine::config::{ReportMode, RunConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::resolver::resolve_parents;
use tracing::{info, instrument};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Dump {
        stats: ParseStats,
        rows_written: usize,
    },
    SurnameSearch {
        stats: ParseStats,
        report: search::SurnameSearchReport,
    },
}

impl RunOutcome {
    /// The line to show the user once the run is over, if the report has one.
    pub fn summary(&self) -> Option<String> {
        match self {
            RunOutcome::Dump { .. } => None,
            RunOutcome::SurnameSearch { report, .. } => Some(report.summary()),
        }
    }
}

/// Reads the configured GEDCOM source, resolves parentage and writes the selected report.
///
/// # Errors
///
/// Fails only when the source cannot be read or the report cannot be written.
#[instrument(skip_all, name = "report_workflow")]
pub fn run(config: &RunConfig, reporter: &ProgressReporter) -> Result<RunOutcome, EngineError> {
    info!("Reading GEDCOM source {:?}", &config.input_path);
    let (mut tree, stats) = reporter
        .phase("Parsing GEDCOM source", || {
            GedcomFile::new(config.parser).read_from_path(&config.input_path)
        })
        .map_err(|source| EngineError::Source {
            path: config.input_path.clone(),
            source,
        })?;
    reporter.report(Progress::Message(format!(
        "Parsed {} individuals and {} families ({} malformed lines skipped).",
        stats.individuals, stats.families, stats.lines_skipped
    )));

    reporter.phase("Resolving parentage", || resolve_parents(&mut tree));

    let outcome = match &config.mode {
        ReportMode::Dump => {
            let rows = reporter.phase("Building full dump", || dump::run(&tree));
            write_rows(config, reporter, &rows)?;
            RunOutcome::Dump {
                stats,
                rows_written: rows.len(),
            }
        }
        ReportMode::SurnameSearch { surname } => {
            let report = reporter.phase("Searching surname", || search::run(&mut tree, surname));
            write_rows(config, reporter, &report.incomplete)?;
            RunOutcome::SurnameSearch { stats, report }
        }
    };

    info!("Report written to {:?}", &config.output.path);
    Ok(outcome)
}

fn write_rows<R: ReportRow>(
    config: &RunConfig,
    reporter: &ProgressReporter,
    rows: &[R],
) -> Result<(), EngineError> {
    let path = &config.output.path;
    reporter
        .phase("Writing report", || -> Result<(), ReportError> {
            let mut sink = CsvSink::create(path, config.output.delimiter)?;
            write_report(rows, &mut sink)
        })
        .map_err(|source| EngineError::Report {
            path: path.clone(),
            source,
        })
}
