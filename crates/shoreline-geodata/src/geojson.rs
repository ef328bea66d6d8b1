//! GeoJSON `FeatureCollection` parsing.
//!
//! Only line geometries are kept: a `LineString` becomes one coastline
//! feature and every member of a `MultiLineString` becomes its own feature.
//! Any other geometry, a null geometry, or a line with a malformed position
//! is skipped rather than failing the whole file.

use serde_json::Value;
use shoreline_core::coastline::{CoastlineDataset, CoastlineFeature, ResolutionTier};
use shoreline_core::error::DomainError;
use tracing::debug;

/// Parses a GeoJSON document into a dataset of the given tier.
///
/// # Errors
///
/// Returns `DomainError::DatasetUnavailable` if the text is not JSON or is
/// not a `FeatureCollection`.
pub fn parse_feature_collection(
    payload: &str,
    tier: ResolutionTier,
) -> Result<CoastlineDataset, DomainError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| DomainError::DatasetUnavailable(format!("JSON parse error: {e}")))?;
    from_geojson_value(&value, tier)
}

/// Builds a dataset from an already parsed GeoJSON value.
///
/// # Errors
///
/// Returns `DomainError::DatasetUnavailable` if the value is not a
/// `FeatureCollection`.
pub fn from_geojson_value(
    value: &Value,
    tier: ResolutionTier,
) -> Result<CoastlineDataset, DomainError> {
    let not_a_collection =
        || DomainError::DatasetUnavailable("document is not a FeatureCollection".to_owned());

    let obj = value.as_object().ok_or_else(not_a_collection)?;
    if obj.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return Err(not_a_collection());
    }
    let features_val = obj
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(not_a_collection)?;

    let mut features = Vec::with_capacity(features_val.len());
    let mut skipped = 0_usize;
    for (index, feature_val) in features_val.iter().enumerate() {
        let Some(geometry) = feature_val.get("geometry").filter(|g| !g.is_null()) else {
            skipped += 1;
            continue;
        };
        match lines_of(geometry) {
            Some(lines) => features.extend(lines),
            None => {
                debug!(index, "skipping non-line or malformed geometry");
                skipped += 1;
            }
        }
    }

    debug!(features = features.len(), skipped, "parsed coastline collection");
    Ok(CoastlineDataset::new(tier, features))
}

fn lines_of(geometry: &Value) -> Option<Vec<CoastlineFeature>> {
    let coordinates = geometry.get("coordinates")?.as_array()?;
    match geometry.get("type")?.as_str()? {
        "LineString" => Some(vec![line_of(coordinates)?]),
        "MultiLineString" => coordinates
            .iter()
            .map(|member| line_of(member.as_array()?))
            .collect(),
        _ => None,
    }
}

fn line_of(positions: &[Value]) -> Option<CoastlineFeature> {
    let vertices = positions
        .iter()
        .map(|position| {
            let pair = position.as_array()?;
            Some((pair.first()?.as_f64()?, pair.get(1)?.as_f64()?))
        })
        .collect::<Option<Vec<_>>>()?;
    Some(CoastlineFeature::from_vertices(vertices))
}
