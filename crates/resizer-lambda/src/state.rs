use crate::services::ResizeService;
use resizer_core::ResizerConfig;
use resizer_storage::StoreProvider;
use std::sync::Arc;

/// Long-lived state built once at cold start and shared read-only by every
/// invocation.
#[derive(Clone)]
pub struct AppState {
    pub config: ResizerConfig,
    pub stores: Arc<dyn StoreProvider>,
    pub service: ResizeService,
}

impl AppState {
    /// Region used when the event names none.
    pub fn fallback_region(&self) -> &str {
        self.config.fallback_region()
    }
}
