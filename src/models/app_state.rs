use std::sync::Arc;

use crate::services::BridgeOrchestrator;

/// Shared state handed to every controller. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub bridge: Arc<BridgeOrchestrator>,
}

impl AppState {
    pub fn new(bridge: BridgeOrchestrator) -> Self {
        Self {
            bridge: Arc::new(bridge),
        }
    }
}
