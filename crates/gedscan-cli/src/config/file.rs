use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub output: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub xref_sentinel: Option<char>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Applies `KEY=VALUE` overrides on top of the values read from the file.
    pub fn apply_set_values(mut self, set_values: &[String]) -> Result<Self> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "output" => self.output = Some(PathBuf::from(value_str)),
                "delimiter" => self.delimiter = Some(parse_single_char(key, value_str)?),
                "xref-sentinel" => self.xref_sentinel = Some(parse_single_char(key, value_str)?),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(self)
    }
}

fn parse_single_char(key: &str, value_str: &str) -> Result<char> {
    let mut chars = value_str.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CliError::Config(format!(
            "Invalid single-character value for {}: '{}'",
            key, value_str
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_kebab_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gedscan.toml");
        fs::write(
            &path,
            r##"
            output = "people.csv"
            delimiter = ";"
            xref-sentinel = "#"
            "##,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("people.csv")));
        assert_eq!(config.delimiter, Some(';'));
        assert_eq!(config.xref_sentinel, Some('#'));
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gedscan.toml");
        fs::write(&path, "strict = true\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::ConfigFile { .. })));
    }

    #[test]
    fn missing_file_is_a_config_file_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CliError::ConfigFile { .. })));
    }

    #[test]
    fn set_values_override_file_values() {
        let config = FileConfig {
            output: Some(PathBuf::from("from-file.csv")),
            ..Default::default()
        }
        .apply_set_values(&["output=cli.csv".to_string(), "delimiter=\t".to_string()])
        .unwrap();

        assert_eq!(config.output, Some(PathBuf::from("cli.csv")));
        assert_eq!(config.delimiter, Some('\t'));
    }

    #[test]
    fn set_values_reject_bad_input() {
        let base = FileConfig::default();
        assert!(base.clone().apply_set_values(&["output".to_string()]).is_err());
        assert!(
            base.clone()
                .apply_set_values(&["delimiter=;;".to_string()])
                .is_err()
        );
        assert!(base.apply_set_values(&["strict=true".to_string()]).is_err());
    }
}
