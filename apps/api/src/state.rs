use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            content: Arc::new(ContentStore::new(config.content_dir.clone())),
            config,
        }
    }
}
