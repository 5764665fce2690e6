// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use crate::error::ConverterResult;
use crate::utils::encoding::Charset;

/// Port for the system clipboard
pub trait ClipboardPort: Send + Sync {
    /// Current clipboard text, `None` when the clipboard holds no text
    fn read_text(&self) -> ConverterResult<Option<String>>;

    /// Replace the clipboard contents with `text`
    fn write_text(&self, text: &str) -> ConverterResult<()>;
}

/// Port for the container tools that move chapters in and out of
/// Matroska/MP4 files and chapter XML
pub trait ContainerToolPort: Send + Sync {
    /// Extract the chapters of `container` as OGM text.
    ///
    /// `charset` is the chapter charset of the source, needed for MP4
    /// containers where it cannot be detected.
    fn extract_chapters(&self, container: &Path, charset: Option<&str>) -> ConverterResult<String>;

    /// Turn OGM chapter text into a chapter XML file at `target`, tagging
    /// every chapter with `language` when given
    fn embed_chapters(
        &self,
        ogm_text: &str,
        target: &Path,
        language: Option<&str>,
    ) -> ConverterResult<PathBuf>;
}

/// Port for file system operations
pub trait FsPort: Send + Sync {
    /// Check if a regular file exists
    fn file_exists(&self, path: &Path) -> bool;

    /// Read a text file of unknown encoding
    fn read_text(&self, path: &Path) -> ConverterResult<String>;

    /// Write a text file in the given charset, replacing any existing file
    fn write_text(&self, path: &Path, text: &str, charset: Charset) -> ConverterResult<()>;
}
