// Local filesystem adapter - File system operations

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConverterResult;
use crate::ports::FsPort;
use crate::utils::encoding::{decode_auto, Charset};

/// Local filesystem adapter
#[derive(Debug, Default)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FsPort for LocalFsAdapter {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> ConverterResult<String> {
        let raw = fs::read(path)?;
        let (text, encoding) = decode_auto(&raw);
        debug!("Read {} as {}", path.display(), encoding);
        Ok(text)
    }

    fn write_text(&self, path: &Path, text: &str, charset: Charset) -> ConverterResult<()> {
        let bytes = charset.encode(text)?;
        fs::write(path, bytes)?;
        debug!("Wrote {} ({:?})", path.display(), charset);
        Ok(())
    }
}
