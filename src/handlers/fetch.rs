// src/handlers/fetch.rs
use log::{error, info};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::models::ApiResponse;
use crate::state::AppState;

/// Refresh the cache from upstream and return the fresh records.
///
/// A failed fetch leaves the cached snapshot untouched.
pub async fn fetch_data(state: Arc<AppState>) -> Result<Json, Rejection> {
    info!("Handling request to refresh income statements");

    let records = state.upstream.fetch().await.map_err(|e| {
        error!("Failed to fetch income statements: {}", e);
        warp::reject::custom(ApiError::from(e))
    })?;

    let snapshot = state.cache.set(records).await;
    info!(
        "Cache refreshed with {} records at {}",
        snapshot.records.len(),
        snapshot.fetched_at
    );

    Ok(warp::reply::json(&ApiResponse::success(
        snapshot.records.as_slice(),
    )))
}

/// Warm the cache once at startup. Returns whether the fetch succeeded.
pub async fn preload_cache(state: Arc<AppState>) -> bool {
    match state.upstream.fetch().await {
        Ok(records) => {
            let snapshot = state.cache.set(records).await;
            info!("Data preloaded successfully ({} records).", snapshot.records.len());
            true
        }
        Err(e) => {
            error!("Error preloading data: {}", e);
            false
        }
    }
}
