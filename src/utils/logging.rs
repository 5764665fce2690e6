//! Logging configuration and subscriber setup

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::{ConverterError, ConverterResult};

/// Log level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// General information
    Info,
    /// Debug information
    Debug,
    /// Very verbose debug information
    Trace,
}

impl LogLevel {
    /// Parse log level from string
    pub fn parse(level_str: &str) -> ConverterResult<Self> {
        match level_str.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ConverterError::parse(
                level_str,
                "invalid log level, valid levels: trace, debug, info, warn, error",
            )),
        }
    }

    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
    /// JSON format for structured logging
    Json,
}

impl LogFormat {
    /// Parse log format from string
    pub fn parse(format_str: &str) -> ConverterResult<Self> {
        match format_str.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConverterError::parse(
                format_str,
                "invalid log format, valid formats: pretty, compact, json",
            )),
        }
    }
}

/// Logging configuration options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_filter()))
    }

    /// Install the global subscriber. Logs go to stderr so that stdout only
    /// carries converter output.
    pub fn init(&self) {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr);

        let result = match self.format {
            LogFormat::Pretty => builder.pretty().try_init(),
            LogFormat::Compact => builder.compact().without_time().with_target(false).try_init(),
            LogFormat::Json => builder.json().try_init(),
        };

        if result.is_ok() {
            tracing::debug!("Logging initialized: {:?}", self);
        }
    }
}
