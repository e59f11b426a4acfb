//! Even-odd ray casting against polygon edges.

use geom_common::{BoundingBox, Point};
use rayon::prelude::*;

/// First and last vertex closer than this per coordinate mean the polygon
/// is already explicitly closed.
const CLOSURE_EPS: f64 = 1e-8;

/// Classify a batch of points against a polygon.
///
/// Uses the even-odd rule: a point is inside iff a horizontal ray cast to
/// the right crosses an odd number of polygon edges. The polygon is
/// implicitly closed (the last vertex connects back to the first unless it
/// already repeats it). A polygon with fewer than three vertices classifies
/// every point as outside. Self-intersecting polygons go through the same
/// even-odd rule with no special-casing.
///
/// Crossing tests use strict inequalities, so points exactly on an edge get
/// no guaranteed classification. Points are independent and classified in
/// parallel; a bounding-box pre-filter rejects far-away points without
/// changing any result (a point outside the vertex bounding box always has
/// even crossing parity).
pub fn points_in_polygon(points: &[Point], polygon: &[Point]) -> Vec<bool> {
    let bbox = match BoundingBox::from_points(polygon) {
        Some(bbox) if polygon.len() >= 3 => bbox,
        _ => return vec![false; points.len()],
    };

    points
        .par_iter()
        .map(|p| bbox.contains_point(p.x, p.y) && crossing_parity(p.x, p.y, polygon))
        .collect()
}

/// Classify a single point against a polygon.
pub fn point_in_polygon(x: f64, y: f64, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    crossing_parity(x, y, polygon)
}

/// Whether a rightward horizontal ray from `(px, py)` crosses the polygon
/// boundary an odd number of times.
fn crossing_parity(px: f64, py: f64, polygon: &[Point]) -> bool {
    let n = polygon.len();
    let first = polygon[0];
    let last = polygon[n - 1];
    let explicitly_closed = (first.x - last.x).abs() < CLOSURE_EPS
        && (first.y - last.y).abs() < CLOSURE_EPS;
    // The wrap edge from the last vertex back to the first closes the ring,
    // unless the caller already repeated the first vertex.
    let edge_count = if explicitly_closed { n - 1 } else { n };

    let mut inside = false;
    for k in 0..edge_count {
        let a = polygon[k];
        let b = polygon[(k + 1) % n];

        // Horizontal edges never cross a horizontal ray.
        if a.y == b.y {
            continue;
        }

        if (a.y > py) != (b.y > py) {
            let x_cross = a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y);
            if px < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}
