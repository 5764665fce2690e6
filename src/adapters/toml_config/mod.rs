// TOML config adapter - Configuration file loading

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::domain::model::OutputFormat;
use crate::error::{ConverterError, ConverterResult};
use crate::utils::logging::{LogFormat, LogLevel};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "chapter-converter.toml";

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub converter: ConverterSection,
    pub tools: ToolsSection,
}

/// `[converter]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterSection {
    pub format: Option<OutputFormat>,
    pub charset: Option<String>,
    pub mp4_charset: Option<String>,
    pub lang: Option<String>,
    pub overwrite: Option<bool>,
    pub clipboard: Option<bool>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
}

/// `[tools]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsSection {
    pub mkvmerge: Option<PathBuf>,
    pub mkvextract: Option<PathBuf>,
}

impl FileConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str, origin: &Path) -> ConverterResult<Self> {
        toml::from_str(content).map_err(|e| ConverterError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> ConverterResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConverterError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&content, path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the explicit config file, or the default one if it exists
    pub fn discover(explicit: Option<&Path>) -> ConverterResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            return Self::load(default_path);
        }

        Ok(Self::default())
    }
}
