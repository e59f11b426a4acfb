//! Stitch unordered contour segments into continuous polylines.
//!
//! Endpoints are quantized to integer keys (`round(coord / tolerance)`) so
//! that floating-point-near-equal endpoints produced by neighboring cells
//! collide in the same hash bucket, without a nearest-neighbor search.

use std::collections::{HashMap, VecDeque};

use geom_common::{Point, Polyline, Segment};

/// Default endpoint quantization tolerance for stitching.
pub const DEFAULT_STITCH_TOLERANCE: f64 = 1e-8;

fn quantize(p: &Point, tolerance: f64) -> (i64, i64) {
    (
        (p.x / tolerance).round() as i64,
        (p.y / tolerance).round() as i64,
    )
}

/// Connect segments into maximal paths.
///
/// Chains are started from the lowest unused segment index and grown
/// greedily at both ends, so every segment lands in exactly one path and
/// the output order is deterministic for a fixed input ordering. A closed
/// level-set component comes back as one path whose first and last point
/// coincide within `tolerance`.
pub fn connect_segments(segments: &[Segment], tolerance: f64) -> Vec<Polyline> {
    if segments.is_empty() {
        return Vec::new();
    }

    // Bucket each endpoint under its quantized key; the second element
    // records which end of the segment sits at that key.
    let mut adjacency: HashMap<(i64, i64), Vec<(usize, usize)>> = HashMap::new();
    for (idx, seg) in segments.iter().enumerate() {
        adjacency
            .entry(quantize(&seg.start, tolerance))
            .or_default()
            .push((idx, 0));
        adjacency
            .entry(quantize(&seg.end, tolerance))
            .or_default()
            .push((idx, 1));
    }

    let mut used = vec![false; segments.len()];
    let mut paths = Vec::new();

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }

        used[start_idx] = true;
        let mut chain: VecDeque<Point> = VecDeque::new();
        chain.push_back(segments[start_idx].start);
        chain.push_back(segments[start_idx].end);

        // Extend from the tail first, then from the head.
        for grow_tail in [true, false] {
            loop {
                let tip = if grow_tail {
                    *chain.back().unwrap()
                } else {
                    *chain.front().unwrap()
                };

                let found = adjacency
                    .get(&quantize(&tip, tolerance))
                    .and_then(|entries| entries.iter().find(|(idx, _)| !used[*idx]))
                    .copied();

                let (idx, endpoint) = match found {
                    Some(hit) => hit,
                    None => break,
                };

                used[idx] = true;
                let far = if endpoint == 0 {
                    segments[idx].end
                } else {
                    segments[idx].start
                };

                if grow_tail {
                    chain.push_back(far);
                } else {
                    chain.push_front(far);
                }
            }
        }

        paths.push(Polyline::new(Vec::from(chain)));
    }

    paths
}
