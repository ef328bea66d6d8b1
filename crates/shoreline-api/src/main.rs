//! Shoreline API server entry point.

use std::error::Error;
use std::sync::Arc;

use shoreline_api::config::ServerConfig;
use shoreline_api::error::AppError;
use shoreline_api::state::AppState;
use shoreline_geodata::geojson_source::GeoJsonCoastlineSource;
use shoreline_navigation::application::location_service::LocationService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Shoreline API server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    // Load the coastline dataset before accepting requests; without it no
    // location can be served.
    let source = Arc::new(GeoJsonCoastlineSource::new(
        config.coastline_path.clone(),
        config.resolution,
    ));
    let location_service = LocationService::new(source, config.search.clone())
        .map_err(|e| AppError::Config(e.to_string()))?;
    let summary = location_service.warm().await.map_err(|e| {
        tracing::error!(
            path = %config.coastline_path.display(),
            error = %e,
            "coastline dataset failed to load; refusing to start"
        );
        AppError::Dataset(e)
    })?;
    tracing::info!(
        tier = %summary.tier,
        features = summary.features,
        "coastline dataset ready"
    );

    // Build router.
    let app = shoreline_api::app(AppState::new(Arc::new(location_service)));

    // Start server.
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Server)?;

    axum::serve(listener, app).await.map_err(AppError::Server)?;

    Ok(())
}
