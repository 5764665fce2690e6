// Adapters - External system implementations

pub mod clipboard_arboard;
pub mod fs_local;
pub mod memory;
pub mod mkvtoolnix;
pub mod toml_config;

// Re-export adapters
pub use clipboard_arboard::ArboardClipboardAdapter;
pub use fs_local::LocalFsAdapter;
pub use memory::{FakeContainerTool, MemoryClipboard, MemoryFs};
pub use mkvtoolnix::{MkvToolNixAdapter, ToolPaths};
pub use toml_config::FileConfig;
