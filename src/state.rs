use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::store::{FeedbackStore, FileStore, MemoryStore};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn FeedbackStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// Builds the store selected by `config.store_backend`.
    pub fn from_config(config: Config) -> Self {
        let store: Arc<dyn FeedbackStore> = match config.store_backend {
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
            StoreBackend::File => Arc::new(FileStore::new(config.data_path.clone())),
        };
        Self { store, config }
    }
}

impl FromRef<AppState> for Arc<dyn FeedbackStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
