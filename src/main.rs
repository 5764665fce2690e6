//! Chapter Converter CLI
//!
//! Converts video chapter lists between formats.
//!
//! # Usage
//!
//! ```bash
//! chapter-converter chapters.txt                 # -> chapters.pbf
//! chapter-converter movie.mkv -f ogm             # -> movie.ogm.txt
//! chapter-converter bookmarks.pbf -o chapters.xml --lang en
//! chapter-converter -c                           # clipboard -> clipboard (tab)
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use chapter_converter::cli::{commands, Cli};
use chapter_converter::config_initialization::initialize_settings;

/// Main entry point for the chapter converter
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = initialize_settings(cli)?;
    settings.logging.init();
    debug!("Effective settings: {:?}", settings);

    info!("Starting chapter converter");
    commands::convert(&settings)?;
    info!("Chapter converter completed successfully");
    Ok(())
}
