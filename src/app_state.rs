use crate::dataset::Dataset;
use crate::dispatch::Dispatcher;
use crate::layout::Layout;

use std::sync::Arc;

use tracing::{event, Level};

/// Shared application state passed to each request handler.
pub struct AppState {
    /// Launch records, loaded once at startup.
    pub dataset: Dataset,

    /// Dashboard layout.
    pub layout: Layout,

    /// Dispatcher of input changes to chart views.
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Create and return an [AppState].
    pub fn new(dataset: Dataset) -> Self {
        let layout = Layout::new(&dataset);
        let dispatcher = Dispatcher::new();
        for binding in dispatcher.bindings() {
            event!(
                Level::DEBUG,
                "output {} bound to inputs {:?}",
                binding.output,
                binding.inputs
            );
        }
        Self {
            dataset,
            layout,
            dispatcher,
        }
    }
}

/// AppState wrapped in an Atomic Reference Count (Arc) to allow multiple references.
pub type SharedAppState = Arc<AppState>;
