//! Synthetic coastline datasets.

use shoreline_core::coastline::{CoastlineDataset, CoastlineFeature, ResolutionTier};

/// A dataset of meridians and parallels every `step` degrees.
///
/// Dense enough at small steps that most candidates cross two edges, which
/// makes it a stand-in for a real coastline when a test needs accepted
/// searches.
///
/// # Panics
///
/// Panics if `step` is not positive.
#[must_use]
pub fn graticule_dataset(tier: ResolutionTier, step: f64) -> CoastlineDataset {
    assert!(step > 0.0, "graticule step must be positive");
    let mut features = Vec::new();

    let mut lon = -180.0;
    while lon <= 180.0 {
        features.push(CoastlineFeature::from_vertices([(lon, -90.0), (lon, 90.0)]));
        lon += step;
    }

    let mut lat = -90.0;
    while lat <= 90.0 {
        features.push(CoastlineFeature::from_vertices([(-180.0, lat), (180.0, lat)]));
        lat += step;
    }

    CoastlineDataset::new(tier, features)
}
