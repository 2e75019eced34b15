use anyhow::Result;
use dotenv::dotenv;
use log::info;
use std::net::SocketAddr;
use warp::Filter;

use valueglance_backend::config::AppConfig;
use valueglance_backend::handlers::fetch::preload_cache;
use valueglance_backend::routes;
use valueglance_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = AppConfig::from_env()?;
    info!(
        "Serving {} annual income statements from {}",
        config.symbol, config.base_url
    );

    // Bind to 0.0.0.0 so the service is reachable inside containers
    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    info!("Will bind to: {}", addr);

    let cors = routes::cors(&config);
    info!("CORS enabled for origins: {:?}", config.cors_origins);

    let state = AppState::new(config)?;

    // Warm the cache in the background; the server comes up either way.
    tokio::spawn(preload_cache(state.clone()));

    let api = routes::routes(state).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
    Ok(())
}
