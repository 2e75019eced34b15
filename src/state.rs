// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::cache::RecordCache;
use crate::services::upstream::{FetchError, UpstreamClient};

/// Shared application state, handed to every route handler.
pub struct AppState {
    pub config: AppConfig,
    pub upstream: UpstreamClient,
    pub cache: RecordCache,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Arc<Self>, FetchError> {
        let upstream = UpstreamClient::new(&config)?;
        Ok(Arc::new(Self {
            config,
            upstream,
            cache: RecordCache::new(),
        }))
    }
}
