//! Candidate viewport generation.

use std::f64::consts::TAU;

use shoreline_core::coastline::Extent;
use shoreline_core::rng::DeterministicRng;

use super::config::SearchConfig;
use super::location::Location;

/// One proposed viewport under evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// `(lon, lat)` in degrees.
    pub center: (f64, f64),
    /// Zoom level within the configured range.
    pub zoom: f64,
    /// Rotation in radians, `[0, 2π)`.
    pub rotation: f64,
    /// Visible rectangle derived from `center` and `zoom`.
    pub view_extent: Extent,
}

impl Candidate {
    /// Builds a candidate and derives its view extent from the nominal canvas.
    #[must_use]
    pub fn new(center: (f64, f64), zoom: f64, rotation: f64, config: &SearchConfig) -> Self {
        let degrees_per_pixel = SearchConfig::degrees_per_pixel(zoom);
        let view_width = config.canvas_width_px * degrees_per_pixel;
        let view_height = config.canvas_height_px * degrees_per_pixel;

        Self {
            center,
            zoom,
            rotation,
            view_extent: Extent::around(center, view_width, view_height),
        }
    }

    /// Draws the next candidate from `rng`.
    ///
    /// Exactly four values are consumed, in order: longitude, latitude, zoom,
    /// rotation. The order is part of the seed contract.
    #[must_use]
    pub fn generate(rng: &mut dyn DeterministicRng, config: &SearchConfig) -> Self {
        let lon = rng.next_f64() * 360.0 - 180.0;
        // Uniform in degrees, not in area.
        let lat = rng.next_f64() * 180.0 - 90.0;
        let zoom = rng.next_f64() * (config.zoom_max - config.zoom_min) + config.zoom_min;
        let rotation = rng.next_f64() * TAU;

        Self::new((lon, lat), zoom, rotation, config)
    }

    /// Converts an accepted candidate into the caller-facing result.
    #[must_use]
    pub fn into_location(self, seed: i64) -> Location {
        Location {
            center: [self.center.0, self.center.1],
            zoom: self.zoom,
            rotation: self.rotation,
            seed,
        }
    }
}
