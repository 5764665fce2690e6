use std::sync::Arc;

use crate::adapters::{ArboardClipboardAdapter, LocalFsAdapter, MkvToolNixAdapter, ToolPaths};
use crate::app::convert_interactor::ConvertInteractor;
use crate::ports::{ClipboardPort, ContainerToolPort, FsPort};

pub trait AppContainer: Send + Sync {
    fn convert_interactor(&self) -> Arc<ConvertInteractor>;
}

/// Wires the interactor to the system clipboard, the local file system
/// and MKVToolNix
pub struct DefaultAppContainer {
    convert_interactor: Arc<ConvertInteractor>,
}

impl DefaultAppContainer {
    pub fn new(tools: ToolPaths) -> Self {
        let clipboard_port = Arc::new(ArboardClipboardAdapter::new());
        let container_port = Arc::new(MkvToolNixAdapter::new(tools));
        let fs_port = Arc::new(LocalFsAdapter::new());

        let convert_interactor = Arc::new(ConvertInteractor::new(
            clipboard_port as Arc<dyn ClipboardPort>,
            container_port as Arc<dyn ContainerToolPort>,
            fs_port as Arc<dyn FsPort>,
        ));

        Self { convert_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn convert_interactor(&self) -> Arc<ConvertInteractor> {
        Arc::clone(&self.convert_interactor)
    }
}
