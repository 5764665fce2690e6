//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for a conversion
#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Input file: chapter text, chapter XML, or an MP4/MKV container
    pub filename: Option<PathBuf>,

    /// Output format (default: from the output extension, tab for the
    /// clipboard, pot otherwise)
    #[arg(
        short,
        long,
        env = "CHAPTER_CONVERTER_FORMAT",
        value_parser = ["simple", "pot", "ogm", "tab", "xml"]
    )]
    pub format: Option<String>,

    /// Output file path (default: derived from the input file)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Read from the clipboard when no input file is usable, and write to
    /// it when no output file is given
    #[arg(short, long)]
    pub clipboard: bool,

    /// Chapter charset of MP4/MKV input [default: utf-8]
    #[arg(long, env = "CHAPTER_CONVERTER_MP4_CHARSET")]
    pub mp4_charset: Option<String>,

    /// Charset of text output files [default: utf-8-sig]
    #[arg(long, env = "CHAPTER_CONVERTER_CHARSET")]
    pub charset: Option<String>,

    /// Chapter language for XML output (e.g. en, ja)
    #[arg(long, env = "CHAPTER_CONVERTER_LANG")]
    pub lang: Option<String>,

    /// Overwrite an existing output file instead of picking a new name
    #[arg(short = 'y', long)]
    pub overwrite: bool,
}
