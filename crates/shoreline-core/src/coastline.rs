//! Coastline data model.
//!
//! Coordinates are planar longitude/latitude degrees. A dataset is loaded
//! once and shared read-only by every search.

use std::fmt;
use std::str::FromStr;

use geo::{BoundingRect, Coord, LineString};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Axis-aligned rectangle in geographic degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Western edge (minimum longitude).
    pub min_x: f64,
    /// Southern edge (minimum latitude).
    pub min_y: f64,
    /// Eastern edge (maximum longitude).
    pub max_x: f64,
    /// Northern edge (maximum latitude).
    pub max_y: f64,
}

impl Extent {
    /// Creates an extent from its four bounds.
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates an extent of the given size centered on `(lon, lat)`.
    #[must_use]
    pub fn around(center: (f64, f64), width: f64, height: f64) -> Self {
        let (lon, lat) = center;
        Self::new(
            lon - width / 2.0,
            lat - height / 2.0,
            lon + width / 2.0,
            lat + height / 2.0,
        )
    }

    /// Width in degrees.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height in degrees.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns true when the two rectangles share at least one point.
    ///
    /// Touching edges count as overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Extent) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    /// Shrinks the rectangle about its center, scaling the half-width and
    /// half-height by `1 - ratio`.
    #[must_use]
    pub fn inset(&self, ratio: f64) -> Self {
        let dx = self.width() / 2.0 * ratio;
        let dy = self.height() / 2.0 * ratio;
        Self::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x - dx,
            self.max_y - dy,
        )
    }
}

impl From<geo::Rect<f64>> for Extent {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

/// Natural Earth coastline resolution a dataset was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionTier {
    /// 1:110m, the small set a client keeps resident.
    Low,
    /// 1:50m, the authoritative server dataset.
    Medium,
    /// 1:10m.
    High,
}

impl ResolutionTier {
    /// Lowercase label used in configuration and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolutionTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "110m" => Ok(Self::Low),
            "medium" | "50m" => Ok(Self::Medium),
            "high" | "10m" => Ok(Self::High),
            other => Err(DomainError::Validation(format!(
                "unknown resolution tier: {other}"
            ))),
        }
    }
}

/// A single coastline polyline with its precomputed bounding box.
#[derive(Debug, Clone)]
pub struct CoastlineFeature {
    line: LineString<f64>,
    bbox: Option<Extent>,
}

impl CoastlineFeature {
    /// Wraps a polyline, computing its bounding box once.
    #[must_use]
    pub fn new(line: LineString<f64>) -> Self {
        let bbox = line.bounding_rect().map(Extent::from);
        Self { line, bbox }
    }

    /// Builds a feature from `(lon, lat)` vertices.
    #[must_use]
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let coords: Vec<Coord<f64>> = vertices.into_iter().map(|(x, y)| Coord { x, y }).collect();
        Self::new(LineString::new(coords))
    }

    /// The underlying polyline.
    #[must_use]
    pub fn line(&self) -> &LineString<f64> {
        &self.line
    }

    /// Bounding box, or `None` for a feature without vertices.
    #[must_use]
    pub fn bbox(&self) -> Option<&Extent> {
        self.bbox.as_ref()
    }

    /// True when the geometry cannot take part in an intersection test:
    /// fewer than two vertices, or any non-finite coordinate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.line.0.len() < 2
            || self
                .line
                .0
                .iter()
                .any(|c| !c.x.is_finite() || !c.y.is_finite())
    }
}

/// All coastline features of one resolution tier.
#[derive(Debug, Clone)]
pub struct CoastlineDataset {
    tier: ResolutionTier,
    features: Vec<CoastlineFeature>,
}

impl CoastlineDataset {
    /// Creates a dataset.
    #[must_use]
    pub fn new(tier: ResolutionTier, features: Vec<CoastlineFeature>) -> Self {
        Self { tier, features }
    }

    /// Creates a dataset with no features.
    #[must_use]
    pub fn empty(tier: ResolutionTier) -> Self {
        Self::new(tier, Vec::new())
    }

    /// The resolution tier.
    #[must_use]
    pub fn tier(&self) -> ResolutionTier {
        self.tier
    }

    /// All features.
    #[must_use]
    pub fn features(&self) -> &[CoastlineFeature] {
        &self.features
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when the dataset has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_detects_disjoint_and_touching_boxes() {
        let a = Extent::new(0.0, 0.0, 10.0, 10.0);

        assert!(a.overlaps(&Extent::new(5.0, 5.0, 15.0, 15.0)));
        assert!(a.overlaps(&Extent::new(10.0, 0.0, 20.0, 10.0)));
        assert!(a.overlaps(&Extent::new(2.0, 2.0, 3.0, 3.0)));
        assert!(!a.overlaps(&Extent::new(10.5, 0.0, 20.0, 10.0)));
        assert!(!a.overlaps(&Extent::new(0.0, -5.0, 10.0, -0.1)));
    }

    #[test]
    fn test_inset_scales_half_extents() {
        let inset = Extent::new(0.0, 0.0, 100.0, 50.0).inset(0.05);

        assert_eq!(inset, Extent::new(2.5, 1.25, 97.5, 48.75));
    }

    #[test]
    fn test_around_centers_extent() {
        let extent = Extent::around((10.0, -20.0), 4.0, 2.0);

        assert_eq!(extent, Extent::new(8.0, -21.0, 12.0, -19.0));
    }

    #[test]
    fn test_feature_bbox_covers_all_vertices() {
        let feature = CoastlineFeature::from_vertices([(3.0, -1.0), (-2.0, 4.0), (1.0, 0.0)]);

        assert_eq!(feature.bbox(), Some(&Extent::new(-2.0, -1.0, 3.0, 4.0)));
        assert!(!feature.is_degenerate());
    }

    #[test]
    fn test_empty_feature_has_no_bbox_and_is_degenerate() {
        let feature = CoastlineFeature::from_vertices(Vec::new());

        assert!(feature.bbox().is_none());
        assert!(feature.is_degenerate());
    }

    #[test]
    fn test_single_vertex_and_nan_features_are_degenerate() {
        assert!(CoastlineFeature::from_vertices([(1.0, 1.0)]).is_degenerate());
        assert!(CoastlineFeature::from_vertices([(0.0, 0.0), (f64::NAN, 1.0)]).is_degenerate());
    }

    #[test]
    fn test_resolution_tier_parses_labels_and_scales() {
        assert_eq!("low".parse::<ResolutionTier>().unwrap(), ResolutionTier::Low);
        assert_eq!(" Medium ".parse::<ResolutionTier>().unwrap(), ResolutionTier::Medium);
        assert_eq!("10m".parse::<ResolutionTier>().unwrap(), ResolutionTier::High);
        assert!("ultra".parse::<ResolutionTier>().is_err());
    }
}
