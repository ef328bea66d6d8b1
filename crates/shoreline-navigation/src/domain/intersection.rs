//! Edge intersection testing.
//!
//! A candidate's frame is shrunk by the inset ratio and split into four
//! edges. The score is the number of distinct edges crossed by at least one
//! coastline feature, so two crossings mean the coastline plausibly cuts
//! through the frame.

use geo::{Coord, Intersects, Line};
use shoreline_core::coastline::{CoastlineFeature, Extent};

use super::candidate::Candidate;

/// Which side of the frame an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Southern edge, running west to east.
    Bottom,
    /// Eastern edge, running south to north.
    Right,
    /// Northern edge, running east to west.
    Top,
    /// Western edge, running north to south.
    Left,
}

/// One boundary segment of the inset frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    /// The side this segment forms.
    pub side: Side,
    /// The segment itself.
    pub line: Line<f64>,
}

/// Builds the four frame edges of `extent` shrunk by `inset_ratio`, in the
/// order bottom, right, top, left.
#[must_use]
pub fn edge_segments(extent: &Extent, inset_ratio: f64) -> [EdgeSegment; 4] {
    let Extent {
        min_x,
        min_y,
        max_x,
        max_y,
    } = extent.inset(inset_ratio);

    let sw = Coord { x: min_x, y: min_y };
    let se = Coord { x: max_x, y: min_y };
    let ne = Coord { x: max_x, y: max_y };
    let nw = Coord { x: min_x, y: max_y };

    [
        EdgeSegment {
            side: Side::Bottom,
            line: Line::new(sw, se),
        },
        EdgeSegment {
            side: Side::Right,
            line: Line::new(se, ne),
        },
        EdgeSegment {
            side: Side::Top,
            line: Line::new(ne, nw),
        },
        EdgeSegment {
            side: Side::Left,
            line: Line::new(nw, sw),
        },
    ]
}

/// True when any segment of the feature's polyline touches or crosses `edge`.
///
/// Degenerate features never cross.
#[must_use]
pub fn feature_crosses(edge: &EdgeSegment, feature: &CoastlineFeature) -> bool {
    if feature.is_degenerate() {
        return false;
    }
    feature
        .line()
        .lines()
        .any(|segment| edge.line.intersects(&segment))
}

/// Counts the distinct frame edges of `candidate` crossed by at least one of
/// `features`. The result is in `[0, 4]`.
#[must_use]
pub fn count_crossed_edges(
    candidate: &Candidate,
    features: &[&CoastlineFeature],
    inset_ratio: f64,
) -> usize {
    edge_segments(&candidate.view_extent, inset_ratio)
        .iter()
        .filter(|edge| features.iter().any(|feature| feature_crosses(edge, feature)))
        .count()
}
