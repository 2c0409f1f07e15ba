//! Loading [`AnalysisConfig`] from YAML files

use crate::analysis::AnalysisConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Default config location (`<config_dir>/graphlens/config.yaml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("graphlens").join("config.yaml"))
}

/// Parse a config from YAML text; missing fields take their defaults
pub fn parse_config(text: &str) -> Result<AnalysisConfig, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(AnalysisConfig::default());
    }
    serde_yaml::from_str(text)
}

/// Load a config file.
///
/// An explicit path must exist. Without one, the default location is
/// used if present, otherwise built-in defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(AnalysisConfig::default()),
        },
    };

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&text).map_err(|source| ConfigError::Parse { path, source })
}
