//! CLI module for the chapter converter
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

/// Chapter Converter
///
/// Converts video chapter lists between OGM, POT (PotPlayer bookmarks),
/// tab/comma separated text and Matroska chapter XML. Reads MediaInfo
/// dumps and hand-written lists as well.
#[derive(Parser, Debug)]
#[command(name = "chapter-converter")]
#[command(about = "Convert video chapter lists between formats")]
#[command(version)]
pub struct Cli {
    /// Conversion options
    #[command(flatten)]
    pub convert: args::ConvertArgs,

    /// Configuration file (default: ./chapter-converter.toml if present)
    #[arg(long, env = "CHAPTER_CONVERTER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, env = "CHAPTER_CONVERTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, value_parser = ["pretty", "compact", "json"])]
    pub log_format: Option<String>,
}
