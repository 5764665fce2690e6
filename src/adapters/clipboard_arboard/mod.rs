// Clipboard adapter - System clipboard through arboard

use tracing::debug;

use crate::error::{ConverterError, ConverterResult};
use crate::ports::ClipboardPort;

/// System clipboard adapter.
///
/// A fresh `arboard::Clipboard` is opened per call; the handle is neither
/// `Sync` on every platform nor needed between calls.
#[derive(Debug, Default)]
pub struct ArboardClipboardAdapter;

impl ArboardClipboardAdapter {
    pub fn new() -> Self {
        Self
    }

    fn open() -> ConverterResult<arboard::Clipboard> {
        arboard::Clipboard::new().map_err(|e| ConverterError::Clipboard {
            message: e.to_string(),
        })
    }
}

impl ClipboardPort for ArboardClipboardAdapter {
    fn read_text(&self) -> ConverterResult<Option<String>> {
        match Self::open()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ConverterError::Clipboard {
                message: e.to_string(),
            }),
        }
    }

    fn write_text(&self, text: &str) -> ConverterResult<()> {
        let text = if cfg!(windows) {
            text.replace('\n', "\r\n")
        } else {
            text.to_string()
        };

        debug!("Writing {} bytes to clipboard", text.len());
        Self::open()?
            .set_text(text)
            .map_err(|e| ConverterError::Clipboard {
                message: e.to_string(),
            })
    }
}
