use crate::config::GatewayConfig;
use book_reader::KvStore;
use std::sync::Arc;

/// Process-scoped shared state. The store client is injected once at
/// startup and reused by every in-flight request; it must be safe for
/// concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>, config: GatewayConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
