//! Chapter Converter Library
//!
//! Converts video chapter lists between the OGM simple chapter format,
//! PotPlayer bookmarks, tab/comma separated text and Matroska chapter XML.
//! Input dialects are detected from the text itself; MediaInfo dumps and
//! hand-written lists are accepted as input.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod formats;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{ConvertInteractor, ConvertReport, ConvertRequest, Destination};
pub use domain::model::{Chapter, ChapterList, Dialect, InputSource, OutputFormat};
pub use error::{ConverterError, ConverterResult};
pub use formats::LinePolicy;
