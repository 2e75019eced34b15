// src/handlers/filter.rs
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::models::ApiResponse;
use crate::services::query::{filter_sort, FilterParams, QueryError};
use crate::state::AppState;

pub async fn filter_data(
    query: HashMap<String, String>,
    state: Arc<AppState>,
) -> Result<Json, Rejection> {
    info!("Handling request to filter income statements");

    let Some(snapshot) = state.cache.get().await else {
        warn!("Filter requested before any successful fetch");
        return Err(warp::reject::custom(ApiError::from(QueryError::NoData)));
    };

    let reject = |e: QueryError| {
        warn!("Rejected filter request: {}", e);
        warp::reject::custom(ApiError::from(e))
    };

    let mut params = FilterParams::from_query(&query).map_err(reject)?;
    if state.config.legacy_zero_bounds {
        params = params.without_zero_bounds();
    }
    debug!("Filter parameters: {:?}", params);

    let data = filter_sort(&snapshot.records, &params).map_err(reject)?;
    debug!("{} of {} records matched", data.len(), snapshot.records.len());

    Ok(warp::reply::json(&ApiResponse::success(data)))
}
