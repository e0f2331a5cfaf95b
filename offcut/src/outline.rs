use itertools::Itertools;

use crate::geometry::primitives::{Point, Rect};
use crate::scale::PhysicalScale;
use crate::suggestion::PlacementSuggestion;

/// Tolerance (in pixels) used when matching edges and testing corners for interiority
pub const EDGE_TOLERANCE: f64 = 0.5;

/// Simplified outline of a cluster of touching placements
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    /// Closed ring of points, the last point connects back to the first
    pub points: Vec<Point>,
    /// Number of placements merged into this outline
    pub n_rects: usize,
}

/// Merges the outlines of touching suggestions.
///
/// Only meaningful when placements are allowed to touch and keep sharp corners,
/// see [`PackingConfig::merges_outlines`](crate::PackingConfig::merges_outlines).
/// Suggestions are snapped back onto the pixel grid before merging, the outlines are returned in millimeters.
pub fn merge_suggestion_outlines(
    suggestions: &[PlacementSuggestion],
    scale: &PhysicalScale,
) -> Vec<Outline> {
    let px_rects = suggestions
        .iter()
        .map(|s| scale.suggestion_to_px(s).to_rect())
        .collect_vec();

    let (sx, sy) = (1.0 / scale.px_per_mm_x, 1.0 / scale.px_per_mm_y);
    merge_outlines(&px_rects)
        .into_iter()
        .map(|o| Outline {
            points: o.points.into_iter().map(|p| p.scale(sx, sy)).collect(),
            n_rects: o.n_rects,
        })
        .collect()
}

/// Groups `rects` (pixel space, integer coordinates) into clusters of edge-sharing rectangles
/// and computes one outline per cluster.
///
/// Multi-rectangle outlines are approximated: all corners which are not strictly inside another
/// rectangle of the cluster, ordered by their angle around the centre of the cluster's bounding box.
/// This is exact for clusters that form a single row or column, but produces degenerate
/// rings for L-shaped or multi-row clusters.
pub fn merge_outlines(rects: &[Rect]) -> Vec<Outline> {
    cluster_rects(rects, EDGE_TOLERANCE)
        .into_iter()
        .map(|cluster| Outline {
            points: cluster_outline(rects, &cluster, EDGE_TOLERANCE),
            n_rects: cluster.len(),
        })
        .collect()
}

/// Clusters of indices into `rects`. Each cluster is expanded until no ungrouped rectangle
/// shares an edge with any of its members. Clusters are ordered by their first member.
pub fn cluster_rects(rects: &[Rect], tolerance: f64) -> Vec<Vec<usize>> {
    let mut grouped = vec![false; rects.len()];
    let mut clusters = vec![];

    for seed in 0..rects.len() {
        if grouped[seed] {
            continue;
        }
        grouped[seed] = true;
        let mut cluster = vec![seed];

        //grow until a fixed point is reached
        loop {
            let joining = (0..rects.len())
                .filter(|&j| !grouped[j])
                .filter(|&j| {
                    cluster
                        .iter()
                        .any(|&i| share_edge(&rects[i], &rects[j], tolerance))
                })
                .collect_vec();
            if joining.is_empty() {
                break;
            }
            for j in joining {
                grouped[j] = true;
                cluster.push(j);
            }
        }
        clusters.push(cluster);
    }
    clusters
}

/// True if `a` and `b` touch along a segment of non-zero length
pub fn share_edge(a: &Rect, b: &Rect, tolerance: f64) -> bool {
    let touch = |p: f64, q: f64| (p - q).abs() <= tolerance;
    let span_overlap =
        |a0: f64, a1: f64, b0: f64, b1: f64| f64::min(a1, b1) - f64::max(a0, b0) > tolerance;

    let vertical = (touch(a.x_max, b.x_min) || touch(b.x_max, a.x_min))
        && span_overlap(a.y_min, a.y_max, b.y_min, b.y_max);
    let horizontal = (touch(a.y_max, b.y_min) || touch(b.y_max, a.y_min))
        && span_overlap(a.x_min, a.x_max, b.x_min, b.x_max);

    vertical || horizontal
}

fn cluster_outline(rects: &[Rect], cluster: &[usize], tolerance: f64) -> Vec<Point> {
    if let [single] = cluster {
        return rects[*single].corners().to_vec();
    }

    let Some(bbox) = cluster.iter().map(|&i| rects[i]).reduce(Rect::bounding_rect) else {
        return vec![];
    };
    let center = bbox.centroid();

    cluster
        .iter()
        .flat_map(|&i| rects[i].corners().map(|c| (i, c)))
        .filter(|(i, c)| {
            !cluster
                .iter()
                .any(|&j| j != *i && rects[j].strictly_contains(c, tolerance))
        })
        .map(|(_, c)| c)
        .unique_by(|p| (p.0.round() as i64, p.1.round() as i64))
        .sorted_by(|a, b| a.angle_around(&center).total_cmp(&b.angle_around(&center)))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size(x, y, w, h)
    }

    #[test]
    fn edge_sharing_requires_overlapping_span() {
        let a = r(0.0, 0.0, 20.0, 20.0);
        assert!(share_edge(&a, &r(20.0, 5.0, 10.0, 10.0), EDGE_TOLERANCE));
        assert!(share_edge(&a, &r(0.0, 20.0, 5.0, 5.0), EDGE_TOLERANCE));
        //corner contact only
        assert!(!share_edge(&a, &r(20.0, 20.0, 10.0, 10.0), EDGE_TOLERANCE));
        //separated by a pixel
        assert!(!share_edge(&a, &r(21.0, 0.0, 10.0, 10.0), EDGE_TOLERANCE));
    }

    #[test]
    fn clusters_grow_transitively() {
        //rect 2 only touches rect 3, rect 3 touches rect 0, rect 1 stands alone
        let rects = [
            r(0.0, 0.0, 10.0, 10.0),
            r(40.0, 0.0, 10.0, 10.0),
            r(20.0, 0.0, 10.0, 10.0),
            r(10.0, 0.0, 10.0, 10.0),
        ];
        assert_eq!(
            cluster_rects(&rects, EDGE_TOLERANCE),
            vec![vec![0, 3, 2], vec![1]]
        );
    }

    #[test]
    fn singleton_outline_is_its_corners() {
        let outlines = merge_outlines(&[r(2.0, 3.0, 4.0, 5.0)]);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].n_rects, 1);
        assert_eq!(
            outlines[0].points,
            vec![Point(2.0, 3.0), Point(6.0, 3.0), Point(6.0, 8.0), Point(2.0, 8.0)]
        );
    }

    #[test]
    fn row_of_two_rects_becomes_one_ring() {
        let outlines = merge_outlines(&[r(0.0, 0.0, 20.0, 20.0), r(20.0, 0.0, 20.0, 20.0)]);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].n_rects, 2);
        assert_eq!(
            outlines[0].points,
            vec![
                Point(0.0, 0.0),
                Point(20.0, 0.0),
                Point(40.0, 0.0),
                Point(40.0, 20.0),
                Point(20.0, 20.0),
                Point(0.0, 20.0),
            ]
        );
    }

    #[test]
    fn l_shaped_cluster_keeps_every_boundary_corner() {
        //the angular ordering is known to be unreliable here, only the point set is checked
        let outlines = merge_outlines(&[
            r(0.0, 0.0, 20.0, 20.0),
            r(20.0, 0.0, 20.0, 20.0),
            r(0.0, 20.0, 20.0, 20.0),
        ]);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].points.len(), 8);
    }

    #[test]
    fn corners_inside_other_rects_are_dropped() {
        let rects = [
            r(0.0, 0.0, 20.0, 20.0),
            r(20.0, 0.0, 20.0, 20.0),
            r(25.0, 20.0, 20.0, 10.0),
            r(40.0, 0.0, 10.0, 25.0),
        ];
        let outlines = merge_outlines(&rects);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].n_rects, 4);
        assert!(!outlines[0].points.contains(&Point(45.0, 20.0)));
        assert!(!outlines[0].points.contains(&Point(40.0, 25.0)));
        assert!(outlines[0].points.contains(&Point(50.0, 25.0)));

        //a rect enclosed by another without touching an edge forms its own cluster
        let outlines = merge_outlines(&[r(0.0, 0.0, 30.0, 30.0), r(10.0, 10.0, 5.0, 5.0)]);
        assert_eq!(outlines.len(), 2);
    }

    #[test]
    fn suggestion_outlines_are_in_millimeters() {
        let scale = PhysicalScale::try_new(100, 100, 50.0, 50.0).unwrap();
        let suggestions = [
            PlacementSuggestion {
                x_mm: 0.0,
                y_mm: 0.0,
                width_mm: 10.0,
                height_mm: 10.0,
            },
            PlacementSuggestion {
                x_mm: 10.0,
                y_mm: 0.0,
                width_mm: 5.0,
                height_mm: 10.0,
            },
        ];
        let outlines = merge_suggestion_outlines(&suggestions, &scale);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].n_rects, 2);
        assert!(outlines[0].points.contains(&Point(15.0, 10.0)));
    }
}
