//! Bounding-box prefilter.
//!
//! A coarse pass that keeps only features whose bounding box overlaps the
//! candidate extent. It may admit features that do not actually cross the
//! extent, but it never drops one that does.

use shoreline_core::coastline::{CoastlineDataset, CoastlineFeature, Extent};

/// Returns the features whose bounding box overlaps `extent`.
///
/// Features without a bounding box (no vertices) are dropped.
#[must_use]
pub fn features_in_extent<'a>(
    dataset: &'a CoastlineDataset,
    extent: &Extent,
) -> Vec<&'a CoastlineFeature> {
    dataset
        .features()
        .iter()
        .filter(|feature| feature.bbox().is_some_and(|bbox| bbox.overlaps(extent)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Intersects, Rect};
    use shoreline_core::coastline::ResolutionTier;
    use shoreline_core::rng::{DeterministicRng, SeededSequence};

    fn rect_of(extent: &Extent) -> Rect<f64> {
        Rect::new(
            (extent.min_x, extent.min_y),
            (extent.max_x, extent.max_y),
        )
    }

    fn random_box(rng: &mut SeededSequence) -> (f64, f64, f64, f64) {
        let x = rng.next_f64() * 360.0 - 180.0;
        let y = rng.next_f64() * 180.0 - 90.0;
        let w = rng.next_f64() * 40.0;
        let h = rng.next_f64() * 40.0;
        (x, y, x + w, y + h)
    }

    #[test]
    fn test_keeps_overlapping_and_drops_disjoint_features() {
        let dataset = CoastlineDataset::new(
            ResolutionTier::Low,
            vec![
                CoastlineFeature::from_vertices([(0.0, 0.0), (5.0, 5.0)]),
                CoastlineFeature::from_vertices([(50.0, 50.0), (60.0, 60.0)]),
                CoastlineFeature::from_vertices([(-5.0, 2.0), (-1.0, 3.0)]),
            ],
        );

        let kept = features_in_extent(&dataset, &Extent::new(-2.0, -2.0, 2.0, 2.0));

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].line().0[1].x, 5.0);
    }

    #[test]
    fn test_bbox_overlap_admits_feature_that_misses_extent() {
        // Diagonal whose bbox covers the extent corner but whose line passes by.
        let dataset = CoastlineDataset::new(
            ResolutionTier::Low,
            vec![CoastlineFeature::from_vertices([(-10.0, 10.0), (10.0, 30.0)])],
        );

        let kept = features_in_extent(&dataset, &Extent::new(5.0, 10.0, 9.0, 12.0));

        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_feature_touching_extent_boundary_is_kept() {
        let dataset = CoastlineDataset::new(
            ResolutionTier::Low,
            vec![CoastlineFeature::from_vertices([(10.0, 0.0), (20.0, 0.0)])],
        );

        let kept = features_in_extent(&dataset, &Extent::new(0.0, -1.0, 10.0, 1.0));

        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_feature_without_vertices_is_dropped() {
        let dataset = CoastlineDataset::new(
            ResolutionTier::Low,
            vec![CoastlineFeature::from_vertices(Vec::new())],
        );

        let kept = features_in_extent(&dataset, &Extent::new(-180.0, -90.0, 180.0, 90.0));

        assert!(kept.is_empty());
    }

    #[test]
    fn test_never_drops_a_feature_whose_box_overlaps_the_extent() {
        let mut rng = SeededSequence::new(2024);

        for _ in 0..200 {
            let (ex0, ey0, ex1, ey1) = random_box(&mut rng);
            let extent = Extent::new(ex0, ey0, ex1, ey1);

            let features: Vec<CoastlineFeature> = (0..50)
                .map(|_| {
                    let (x0, y0, x1, y1) = random_box(&mut rng);
                    CoastlineFeature::from_vertices([(x0, y0), (x1, y1)])
                })
                .collect();
            let dataset = CoastlineDataset::new(ResolutionTier::Medium, features);

            let kept = features_in_extent(&dataset, &extent);

            for feature in dataset.features() {
                let bbox = feature.bbox().unwrap();
                if rect_of(bbox).intersects(&rect_of(&extent)) {
                    assert!(
                        kept.iter().any(|k| std::ptr::eq(*k, feature)),
                        "feature {bbox:?} overlapping {extent:?} was dropped"
                    );
                }
            }
        }
    }
}
