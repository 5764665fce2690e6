//! Common utilities and helpers

pub mod encoding;
pub mod logging;
pub mod path;
pub mod time;
