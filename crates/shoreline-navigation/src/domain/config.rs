//! Search configuration.

use std::f64::consts::TAU;

use shoreline_core::error::DomainError;

/// Longitude span covered by one 256 px tile at zoom 0.
pub const DEGREES_PER_256_PIXELS: f64 = 360.0 / 256.0;

/// The location returned when no candidate is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackView {
    /// `(lon, lat)` in degrees.
    pub center: (f64, f64),
    /// Zoom level.
    pub zoom: f64,
    /// Rotation in radians.
    pub rotation: f64,
}

impl Default for FallbackView {
    /// New York Harbor.
    fn default() -> Self {
        Self {
            center: (-73.9857, 40.7484),
            zoom: 8.0,
            rotation: 0.0,
        }
    }
}

/// Tunables for candidate generation and acceptance.
///
/// The defaults define the public seed-to-location mapping; changing any of
/// them changes where existing seeds land.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Lowest zoom a candidate may have.
    pub zoom_min: f64,
    /// Highest zoom a candidate may have.
    pub zoom_max: f64,
    /// Nominal canvas width used to size the view extent.
    pub canvas_width_px: f64,
    /// Nominal canvas height used to size the view extent.
    pub canvas_height_px: f64,
    /// Fraction of each half-extent removed before building the edges.
    pub inset_ratio: f64,
    /// Distinct edges that must be crossed to accept a candidate.
    pub min_intersections: usize,
    /// Candidates tried before giving up.
    pub max_attempts: u32,
    /// Result when every attempt is rejected.
    pub fallback: FallbackView,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            zoom_min: 3.0,
            zoom_max: 10.0,
            canvas_width_px: 600.0,
            canvas_height_px: 520.0,
            inset_ratio: 0.05,
            min_intersections: 2,
            max_attempts: 100,
            fallback: FallbackView::default(),
        }
    }
}

impl SearchConfig {
    /// Checks that the values describe a search that can terminate with
    /// in-range results.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` describing the first bad value.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.zoom_min.is_finite() || !self.zoom_max.is_finite() {
            return Err(DomainError::Validation(
                "zoom bounds must be finite".to_owned(),
            ));
        }
        if self.zoom_min > self.zoom_max {
            return Err(DomainError::Validation(format!(
                "zoom_min ({}) must not exceed zoom_max ({})",
                self.zoom_min, self.zoom_max
            )));
        }
        if !(self.canvas_width_px > 0.0 && self.canvas_height_px > 0.0) {
            return Err(DomainError::Validation(
                "canvas dimensions must be positive".to_owned(),
            ));
        }
        if !(0.0..0.5).contains(&self.inset_ratio) {
            return Err(DomainError::Validation(format!(
                "inset_ratio must be in [0, 0.5), got {}",
                self.inset_ratio
            )));
        }
        if self.min_intersections > 4 {
            return Err(DomainError::Validation(format!(
                "min_intersections must be at most 4, got {}",
                self.min_intersections
            )));
        }
        if self.max_attempts == 0 {
            return Err(DomainError::Validation(
                "max_attempts must be at least 1".to_owned(),
            ));
        }
        let fallback = &self.fallback;
        if !(-180.0..180.0).contains(&fallback.center.0)
            || !(-90.0..90.0).contains(&fallback.center.1)
            || !(0.0..TAU).contains(&fallback.rotation)
        {
            return Err(DomainError::Validation(
                "fallback view is out of range".to_owned(),
            ));
        }
        Ok(())
    }

    /// Approximate degrees per pixel at `zoom`.
    #[must_use]
    pub fn degrees_per_pixel(zoom: f64) -> f64 {
        DEGREES_PER_256_PIXELS / 2f64.powf(zoom)
    }
}
