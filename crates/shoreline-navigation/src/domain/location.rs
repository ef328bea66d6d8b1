//! The search result exposed across the service boundary.

use serde::{Deserialize, Serialize};

/// A map view found for a seed.
///
/// This is everything a caller needs to reproduce the view; it does not say
/// whether the search accepted a candidate or fell back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// `[lon, lat]` in degrees (EPSG:4326).
    pub center: [f64; 2],
    /// Zoom level.
    pub zoom: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// The seed that produced this location.
    pub seed: i64,
}

impl Location {
    /// Longitude of the center.
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.center[0]
    }

    /// Latitude of the center.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.center[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_serializes_center_as_lon_lat_array() {
        let location = Location {
            center: [-73.9857, 40.7484],
            zoom: 8.0,
            rotation: 0.0,
            seed: 7,
        };

        let json = serde_json::to_value(location).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "center": [-73.9857, 40.7484],
                "zoom": 8.0,
                "rotation": 0.0,
                "seed": 7
            })
        );
    }
}
