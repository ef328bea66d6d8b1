//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use shoreline_core::coastline::CoastlineDataset;
use shoreline_core::source::CoastlineSource;
use shoreline_navigation::application::location_service::LocationService;
use shoreline_navigation::domain::config::SearchConfig;
use shoreline_test_support::StaticCoastlineSource;
use tower::ServiceExt;

use shoreline_api::state::AppState;

/// Build the full app router over `dataset` with default search settings.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app(dataset: CoastlineDataset) -> Router {
    build_test_app_with_source(Arc::new(StaticCoastlineSource::new(dataset)))
}

/// Build the full app router over an arbitrary coastline source.
pub fn build_test_app_with_source(source: Arc<dyn CoastlineSource>) -> Router {
    let service = LocationService::new(source, SearchConfig::default()).unwrap();
    build_test_app_with_service(Arc::new(service))
}

/// Build the full app router around an existing service, so tests can
/// inspect it after requests.
pub fn build_test_app_with_service(service: Arc<LocationService>) -> Router {
    shoreline_api::app(AppState::new(service))
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
