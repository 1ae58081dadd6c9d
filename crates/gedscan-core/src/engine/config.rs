use crate::core::io::gedcom::GedcomOptions;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CSV_DELIMITER: u8 = b',';

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Which report a run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportMode {
    /// Every individual with resolved parent names and sibling counts.
    Dump,
    /// Individuals with the given surname whose parentage is incomplete.
    SurnameSearch { surname: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub delimiter: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub parser: GedcomOptions,
    pub mode: ReportMode,
    pub output: OutputConfig,
}

#[derive(Default)]
pub struct RunConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    mode: Option<ReportMode>,
    xref_sentinel: Option<char>,
    delimiter: Option<u8>,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.input_path = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn mode(mut self, mode: ReportMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn xref_sentinel(mut self, sentinel: char) -> Self {
        self.xref_sentinel = Some(sentinel);
        self
    }
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let parser = match self.xref_sentinel {
            Some(sentinel) if sentinel.is_whitespace() => {
                return Err(ConfigError::InvalidValue {
                    name: "xref_sentinel",
                    reason: "must not be whitespace".to_string(),
                });
            }
            Some(xref_sentinel) => GedcomOptions { xref_sentinel },
            None => GedcomOptions::default(),
        };

        let delimiter = self.delimiter.unwrap_or(DEFAULT_CSV_DELIMITER);
        if matches!(delimiter, b'"' | b'\n' | b'\r') {
            return Err(ConfigError::InvalidValue {
                name: "delimiter",
                reason: format!("'{}' cannot separate CSV fields", delimiter.escape_ascii()),
            });
        }

        Ok(RunConfig {
            input_path: self
                .input_path
                .ok_or(ConfigError::MissingParameter("input_path"))?,
            parser,
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
            output: OutputConfig {
                path: self
                    .output_path
                    .ok_or(ConfigError::MissingParameter("output_path"))?,
                delimiter,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
            .input_path(PathBuf::from("tree.ged"))
            .output_path(PathBuf::from("report.csv"))
            .mode(ReportMode::Dump)
    }

    #[test]
    fn build_applies_defaults_for_optional_fields() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.parser, GedcomOptions::default());
        assert_eq!(config.output.delimiter, b',');
        assert_eq!(config.mode, ReportMode::Dump);
    }

    #[test]
    fn build_fails_without_required_fields() {
        let missing_input = RunConfigBuilder::new()
            .output_path(PathBuf::from("report.csv"))
            .mode(ReportMode::Dump)
            .build();
        assert_eq!(
            missing_input,
            Err(ConfigError::MissingParameter("input_path"))
        );

        let missing_mode = RunConfigBuilder::new()
            .input_path(PathBuf::from("tree.ged"))
            .output_path(PathBuf::from("report.csv"))
            .build();
        assert_eq!(missing_mode, Err(ConfigError::MissingParameter("mode")));
    }

    #[test]
    fn build_rejects_unusable_delimiter_and_sentinel() {
        assert!(matches!(
            complete_builder().delimiter(b'"').build(),
            Err(ConfigError::InvalidValue {
                name: "delimiter",
                ..
            })
        ));
        assert!(matches!(
            complete_builder().xref_sentinel(' ').build(),
            Err(ConfigError::InvalidValue {
                name: "xref_sentinel",
                ..
            })
        ));
    }

    #[test]
    fn build_keeps_custom_values() {
        let config = complete_builder()
            .xref_sentinel('#')
            .delimiter(b';')
            .mode(ReportMode::SurnameSearch {
                surname: "Doe".into(),
            })
            .build()
            .unwrap();
        assert_eq!(config.parser.xref_sentinel, '#');
        assert_eq!(config.output.delimiter, b';');
        assert_eq!(
            config.mode,
            ReportMode::SurnameSearch {
                surname: "Doe".into()
            }
        );
    }
}
