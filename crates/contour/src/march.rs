//! Marching squares: cell classification and edge interpolation.

use geom_common::{Point, Segment};

/// Corner values closer than this are treated as equal and the crossing
/// defaults to the edge midpoint, avoiding division blow-up.
const DEGENERATE_EPS: f64 = 1e-10;

/// Marching squares lookup table: maps a 4-bit case index to the edge pairs
/// to connect.
///
/// Case bits are set per corner at or above the level: bit 0 = bottom-left,
/// bit 1 = bottom-right, bit 2 = top-right, bit 3 = top-left. Edge indices:
/// 0 = bottom, 1 = right, 2 = top, 3 = left. Cases 0 and 15 produce nothing.
/// The ambiguous saddle cases 5 and 10 always split into the same two
/// parallel segments; there is no center-sample disambiguation.
pub const EDGE_TABLE: [&[(usize, usize)]; 16] = [
    &[],                 // 0
    &[(3, 0)],           // 1
    &[(0, 1)],           // 2
    &[(3, 1)],           // 3
    &[(1, 2)],           // 4
    &[(3, 0), (1, 2)],   // 5 (saddle)
    &[(0, 2)],           // 6
    &[(3, 2)],           // 7
    &[(2, 3)],           // 8
    &[(2, 0)],           // 9
    &[(0, 1), (2, 3)],   // 10 (saddle)
    &[(2, 1)],           // 11
    &[(1, 3)],           // 12
    &[(1, 0)],           // 13
    &[(0, 3)],           // 14
    &[],                 // 15
];

/// One grid cell: physical corner coordinates and corner sample values.
///
/// Corners are numbered counter-clockwise from the bottom-left:
/// 0 = (x0, y0), 1 = (x1, y0), 2 = (x1, y1), 3 = (x0, y1).
struct Cell {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    v0: f64,
    v1: f64,
    v2: f64,
    v3: f64,
}

impl Cell {
    /// Interpolated crossing point of the level along the given edge.
    fn edge_crossing(&self, edge: usize, level: f64) -> Point {
        let (va, vb, pa, pb) = match edge {
            // bottom: corner 0 -> 1
            0 => (
                self.v0,
                self.v1,
                Point::new(self.x0, self.y0),
                Point::new(self.x1, self.y0),
            ),
            // right: corner 1 -> 2
            1 => (
                self.v1,
                self.v2,
                Point::new(self.x1, self.y0),
                Point::new(self.x1, self.y1),
            ),
            // top: corner 2 -> 3
            2 => (
                self.v2,
                self.v3,
                Point::new(self.x1, self.y1),
                Point::new(self.x0, self.y1),
            ),
            // left: corner 3 -> 0
            _ => (
                self.v3,
                self.v0,
                Point::new(self.x0, self.y1),
                Point::new(self.x0, self.y0),
            ),
        };
        interpolate(va, vb, pa, pb, level)
    }
}

/// Linear interpolation of the level crossing between two corner samples.
fn interpolate(va: f64, vb: f64, pa: Point, pb: Point, level: f64) -> Point {
    let dv = vb - va;
    let t = if dv.abs() < DEGENERATE_EPS {
        0.5
    } else {
        (level - va) / dv
    };
    Point::new(pa.x + t * (pb.x - pa.x), pa.y + t * (pb.y - pa.y))
}

/// Generate contour segments for one level via marching squares.
///
/// `xs` (length M) and `ys` (length N) are the grid's physical coordinates;
/// `z` holds N*M samples in row-major order (row = y). Grids too small to
/// form a cell, or whose sample count disagrees with the coordinate
/// lengths, yield no segments. Cells containing a non-finite sample (NaN or
/// infinite) are skipped entirely; the rest of the grid still contributes.
///
/// Cells are visited row-major and segments emitted in table order, so the
/// output ordering is deterministic for a fixed input.
pub fn march_squares(xs: &[f64], ys: &[f64], z: &[f64], level: f64) -> Vec<Segment> {
    let nx = xs.len();
    let ny = ys.len();

    if nx < 2 || ny < 2 || z.len() != nx * ny {
        return Vec::new();
    }

    let mut segments = Vec::new();

    for i in 0..(ny - 1) {
        for j in 0..(nx - 1) {
            let v0 = z[i * nx + j]; // bottom-left
            let v1 = z[i * nx + j + 1]; // bottom-right
            let v2 = z[(i + 1) * nx + j + 1]; // top-right
            let v3 = z[(i + 1) * nx + j]; // top-left

            if !(v0.is_finite() && v1.is_finite() && v2.is_finite() && v3.is_finite()) {
                continue;
            }

            let mut case_index = 0;
            if v0 >= level {
                case_index |= 1;
            }
            if v1 >= level {
                case_index |= 2;
            }
            if v2 >= level {
                case_index |= 4;
            }
            if v3 >= level {
                case_index |= 8;
            }

            let edge_pairs = EDGE_TABLE[case_index];
            if edge_pairs.is_empty() {
                continue;
            }

            let cell = Cell {
                x0: xs[j],
                x1: xs[j + 1],
                y0: ys[i],
                y1: ys[i + 1],
                v0,
                v1,
                v2,
                v3,
            };

            for &(ea, eb) in edge_pairs {
                segments.push(Segment::new(
                    cell.edge_crossing(ea, level),
                    cell.edge_crossing(eb, level),
                ));
            }
        }
    }

    segments
}
