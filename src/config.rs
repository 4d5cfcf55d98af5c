use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{NumberMode, Selection};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One import run: which exports to read and where the script goes.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// CSV exports, read in this order.
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub numbers: NumberMode,
    #[serde(default = "default_data_source")]
    pub data_source: String,
}

fn default_data_source() -> String {
    "Space-Track.org".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content, Path::new(path).parent())
    }

    /// Relative paths resolve against `base`, normally the config's directory.
    pub fn from_str(yaml: &str, base: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(yaml)?;
        if let Some(base) = base {
            for input in &mut config.inputs {
                *input = base.join(&*input);
            }
            config.output = base.join(&config.output);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let config = Config::from_str("inputs: [a.csv]\noutput: out.sql\n", None).unwrap();
        assert_eq!(config.inputs, [PathBuf::from("a.csv")]);
        assert_eq!(config.selection, Selection::Latest);
        assert_eq!(config.numbers, NumberMode::Strict);
        assert_eq!(config.data_source, "Space-Track.org");
    }

    #[test]
    fn parses_modes_and_resolves_paths() {
        let yaml = "\
inputs:
  - gp/one.csv
  - /abs/two.csv
output: out/import.sql
selection: all_epochs
numbers: deferred
data_source: CelesTrak
";
        let config = Config::from_str(yaml, Some(Path::new("/etc/satcat"))).unwrap();
        assert_eq!(
            config.inputs,
            [
                PathBuf::from("/etc/satcat/gp/one.csv"),
                PathBuf::from("/abs/two.csv")
            ]
        );
        assert_eq!(config.output, PathBuf::from("/etc/satcat/out/import.sql"));
        assert_eq!(config.selection, Selection::AllEpochs);
        assert_eq!(config.numbers, NumberMode::Deferred);
        assert_eq!(config.data_source, "CelesTrak");
    }

    #[test]
    fn unknown_selection_is_rejected() {
        let err = Config::from_str("inputs: []\noutput: o.sql\nselection: newest\n", None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
