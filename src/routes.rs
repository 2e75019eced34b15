// src/routes.rs
use log::info;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reject::{MethodNotAllowed, Rejection};
use warp::{Filter, Reply};

use crate::config::AppConfig;
use crate::handlers::error::ApiError;
use crate::handlers::{fetch::fetch_data, filter::filter_data};
use crate::models::ApiResponse;
use crate::state::AppState;

// Application errors keep HTTP 200 and only differ in the envelope.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if let Some(api_error) = err.find::<ApiError>() {
        code = StatusCode::OK;
        message = api_error.message.as_str();
    } else if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found";
    } else if err.find::<MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed";
    } else {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error";
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&ApiResponse::error(message)),
        code,
    ))
}

pub fn cors(config: &AppConfig) -> warp::cors::Builder {
    warp::cors()
        .allow_origins(config.cors_origins.iter().map(String::as_str))
        .allow_credentials(true)
        .allow_headers(vec![
            "accept",
            "authorization",
            "content-type",
            "origin",
            "x-requested-with",
        ])
        .allow_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
}

pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let state_filter = warp::any().map(move || state.clone());

    let fetch_route = warp::path!("fetch-data")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(fetch_data);

    let filter_route = warp::path!("filter-data")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(state_filter.clone())
        .and_then(filter_data);

    info!("All routes configured successfully.");

    fetch_route.or(filter_route).recover(handle_rejection)
}
