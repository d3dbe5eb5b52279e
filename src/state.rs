// src/state.rs
use crate::config::Config;
use crate::storage::AttachmentStore;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Arc<Config>,
    pub storage: AttachmentStore,
}

impl AppState {
    pub fn new(db_pool: PgPool, config: Config, storage: AttachmentStore) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
            storage,
        }
    }
}
