//! Command implementations

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::app::convert_interactor::{
    ConvertInteractor, ConvertReport, ConvertRequest, Destination,
};
use crate::config_initialization::Settings;

/// Execute a conversion with the system clipboard, local files and MKVToolNix
pub fn convert(settings: &Settings) -> Result<()> {
    let container = DefaultAppContainer::new(settings.tools.clone());
    let request = settings.convert_request();

    let stdout = io::stdout();
    run_conversion(&container.convert_interactor(), &request, &mut stdout.lock())?;
    Ok(())
}

/// Run one conversion, echoing clipboard input to `out` as soon as it is
/// read and the result once it is written
pub fn run_conversion(
    interactor: &ConvertInteractor,
    request: &ConvertRequest,
    out: &mut impl Write,
) -> Result<ConvertReport> {
    info!("Starting conversion");
    let input = interactor
        .acquire_input(request)
        .context("Conversion failed")?;
    if let Some(text) = input.clipboard_text() {
        print_clipboard_input(text, out).context("Failed to write to stdout")?;
    }

    let report = interactor
        .convert(request, input)
        .context("Conversion failed")?;
    info!(
        "Converted {} chapters from {} to {}",
        report.chapters.len(),
        report.dialect,
        report.format
    );

    print_report(&report, out).context("Failed to write to stdout")?;
    Ok(report)
}

/// Echo text read from the clipboard
pub fn print_clipboard_input(text: &str, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Get data from clipboard:")?;
    writeln!(out, "{}", text.trim_end())
}

/// Echo the clipboard output or the output file to the user
pub fn print_report(report: &ConvertReport, out: &mut impl Write) -> io::Result<()> {
    match &report.destination {
        Destination::Clipboard => {
            writeln!(out, "Set data to clipboard:")?;
            writeln!(out, "{}", report.output_text.trim_end())?;
        }
        Destination::File(path) => {
            writeln!(out, "Write to file: {}", path.display())?;
        }
    }
    Ok(())
}
