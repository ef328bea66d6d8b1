//! Integration tests for the coastal location endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use shoreline_core::coastline::{CoastlineDataset, ResolutionTier};
use shoreline_test_support::{FailingCoastlineSource, graticule_dataset};

#[tokio::test]
async fn test_same_seed_returns_identical_location() {
    let dataset = graticule_dataset(ResolutionTier::Medium, 1.0);

    let (status_a, first) =
        common::get_json(common::build_test_app(dataset.clone()), "/api/coastal-location/8675309").await;
    let (status_b, second) =
        common::get_json(common::build_test_app(dataset), "/api/coastal-location/8675309").await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["seed"], 8_675_309);
}

#[tokio::test]
async fn test_accepted_location_has_documented_shape_and_bounds() {
    let app = common::build_test_app(graticule_dataset(ResolutionTier::Medium, 1.0));

    let (status, json) = common::get_json(app, "/api/coastal-location/42").await;

    assert_eq!(status, StatusCode::OK);
    let center = json["center"].as_array().unwrap();
    assert_eq!(center.len(), 2);
    assert_eq!(
        center[0].as_f64().unwrap(),
        206_659.0 / 233_280.0 * 360.0 - 180.0
    );
    assert_eq!(
        center[1].as_f64().unwrap(),
        190_736.0 / 233_280.0 * 180.0 - 90.0
    );
    let zoom = json["zoom"].as_f64().unwrap();
    assert!((3.0..=10.0).contains(&zoom));
    let rotation = json["rotation"].as_f64().unwrap();
    assert!((0.0..std::f64::consts::TAU).contains(&rotation));
    assert_eq!(json["seed"], 42);
}

#[tokio::test]
async fn test_negative_seed_is_accepted() {
    let app = common::build_test_app(graticule_dataset(ResolutionTier::Medium, 1.0));

    let (status, json) = common::get_json(app, "/api/coastal-location/-250").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["seed"], -250);
    let lon = json["center"][0].as_f64().unwrap();
    assert!((-180.0..180.0).contains(&lon));
}

#[tokio::test]
async fn test_empty_dataset_returns_fallback_with_original_seed() {
    let app = common::build_test_app(CoastlineDataset::empty(ResolutionTier::Medium));

    let (status, json) = common::get_json(app, "/api/coastal-location/5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "center": [-73.9857, 40.7484],
            "zoom": 8.0,
            "rotation": 0.0,
            "seed": 5
        })
    );
}

#[tokio::test]
async fn test_non_integer_seed_returns_400() {
    let app = common::build_test_app(graticule_dataset(ResolutionTier::Medium, 1.0));

    let (status, json) = common::get_json(app, "/api/coastal-location/12.5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_unloadable_dataset_returns_503() {
    let app = common::build_test_app_with_source(Arc::new(FailingCoastlineSource));

    let (status, json) = common::get_json(app, "/api/coastal-location/5").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "dataset_unavailable");
    assert!(json["message"].as_str().unwrap().contains("coast50.geojson"));
}
