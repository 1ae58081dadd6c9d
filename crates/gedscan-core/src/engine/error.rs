use super::config::ConfigError;
use crate::core::io::gedcom::GedcomError;
use crate::core::io::report::ReportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read GEDCOM source '{path}': {source}", path = path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: GedcomError,
    },

    #[error("Failed to write report '{path}': {source}", path = path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: ReportError,
    },
}
