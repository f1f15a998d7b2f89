use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::SyncStore;

/// Everything a command needs, handed down explicitly. The store is the one
/// shared mirror for the whole process.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: Arc<SyncStore>,
}

impl AppContext {
    pub fn new(config: AppConfig, store: Arc<SyncStore>) -> Self {
        Self { config, store }
    }
}
