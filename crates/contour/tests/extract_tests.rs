//! Integration tests for contour extraction.

use contour::{
    connect_segments, extract_contours, generate_levels, march_squares,
    DEFAULT_STITCH_TOLERANCE,
};
use geom_common::GeomError;

/// Build a uniform grid over `[-extent, extent]` in both axes.
fn uniform_grid(n: usize, extent: f64) -> (Vec<f64>, Vec<f64>) {
    let step = 2.0 * extent / (n - 1) as f64;
    let coords: Vec<f64> = (0..n).map(|k| -extent + k as f64 * step).collect();
    (coords.clone(), coords)
}

/// Sample `f` over the grid in row-major order (row = y).
fn sample(xs: &[f64], ys: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let mut z = Vec::with_capacity(xs.len() * ys.len());
    for &y in ys {
        for &x in xs {
            z.push(f(x, y));
        }
    }
    z
}

/// Bilinear interpolation of the field at an arbitrary in-grid point.
fn bilinear(xs: &[f64], ys: &[f64], z: &[f64], x: f64, y: f64) -> f64 {
    let nx = xs.len();
    let step_x = xs[1] - xs[0];
    let step_y = ys[1] - ys[0];
    let j = (((x - xs[0]) / step_x).floor() as usize).min(nx - 2);
    let i = (((y - ys[0]) / step_y).floor() as usize).min(ys.len() - 2);

    let tx = (x - xs[j]) / step_x;
    let ty = (y - ys[i]) / step_y;

    let v00 = z[i * nx + j];
    let v01 = z[i * nx + j + 1];
    let v10 = z[(i + 1) * nx + j];
    let v11 = z[(i + 1) * nx + j + 1];

    (1.0 - ty) * ((1.0 - tx) * v00 + tx * v01) + ty * ((1.0 - tx) * v10 + tx * v11)
}

// ============================================================================
// Closure: a closed level set forms a single closed path
// ============================================================================

#[test]
fn test_circle_yields_one_closed_path() {
    let (xs, ys) = uniform_grid(41, 2.0);
    let z = sample(&xs, &ys, |x, y| 1.0 - (x * x + y * y));

    let paths = extract_contours(&xs, &ys, &z, 0.0).unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].is_closed(DEFAULT_STITCH_TOLERANCE));
    assert!(paths[0].len() > 8);
}

#[test]
fn test_circle_radius_is_approximated() {
    let (xs, ys) = uniform_grid(81, 2.0);
    let z = sample(&xs, &ys, |x, y| 1.0 - (x * x + y * y));

    let paths = extract_contours(&xs, &ys, &z, 0.0).unwrap();
    for p in &paths[0].points {
        let r = (p.x * p.x + p.y * p.y).sqrt();
        assert!((r - 1.0).abs() < 0.01, "point ({}, {}) has radius {}", p.x, p.y, r);
    }
}

// ============================================================================
// Conservation: every segment appears in exactly one path
// ============================================================================

#[test]
fn test_segment_conservation() {
    let (xs, ys) = uniform_grid(25, 2.0);
    // Two humps produce several disjoint contour components.
    let z = sample(&xs, &ys, |x, y| {
        (-((x - 0.8).powi(2) + y * y) * 4.0).exp() + (-((x + 0.8).powi(2) + y * y) * 4.0).exp()
    });

    let segments = march_squares(&xs, &ys, &z, 0.5);
    let paths = connect_segments(&segments, DEFAULT_STITCH_TOLERANCE);

    let consumed: usize = paths.iter().map(|p| p.len() - 1).sum();
    assert_eq!(consumed, segments.len());
}

// ============================================================================
// Edge interpolation: returned points sit on the level set
// ============================================================================

#[test]
fn test_contour_points_evaluate_to_level() {
    let (xs, ys) = uniform_grid(33, 2.0);
    let z = sample(&xs, &ys, |x, y| x * x + 0.5 * y * y);
    let level = 1.25;

    let paths = extract_contours(&xs, &ys, &z, level).unwrap();
    assert!(!paths.is_empty());

    for path in &paths {
        for p in &path.points {
            let value = bilinear(&xs, &ys, &z, p.x, p.y);
            assert!(
                (value - level).abs() < 1e-9,
                "point ({}, {}) interpolates to {} instead of {}",
                p.x,
                p.y,
                value,
                level
            );
        }
    }
}

// ============================================================================
// Determinism and scaling
// ============================================================================

#[test]
fn test_extraction_is_idempotent() {
    let (xs, ys) = uniform_grid(29, 1.5);
    let z = sample(&xs, &ys, |x, y| (3.0 * x).sin() + (3.0 * y).cos());

    let first = extract_contours(&xs, &ys, &z, 0.25).unwrap();
    let second = extract_contours(&xs, &ys, &z, 0.25).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_coordinate_scaling_scales_output() {
    let (xs, ys) = uniform_grid(21, 2.0);
    let z = sample(&xs, &ys, |x, y| 1.0 - (x * x + y * y));

    let scale = 12.5;
    let xs_scaled: Vec<f64> = xs.iter().map(|&v| v * scale).collect();
    let ys_scaled: Vec<f64> = ys.iter().map(|&v| v * scale).collect();

    let base = extract_contours(&xs, &ys, &z, 0.0).unwrap();
    let scaled = extract_contours(&xs_scaled, &ys_scaled, &z, 0.0).unwrap();

    assert_eq!(base.len(), scaled.len());
    for (a, b) in base.iter().zip(&scaled) {
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.points.iter().zip(&b.points) {
            assert!((pa.x * scale - pb.x).abs() < 1e-9);
            assert!((pa.y * scale - pb.y).abs() < 1e-9);
        }
    }
}

// ============================================================================
// Saddle cells
// ============================================================================

#[test]
fn test_saddle_cell_splits_into_two_paths() {
    // Single cell with diagonally-opposed high corners: the ambiguous case
    // always resolves to two parallel segments.
    let xs = [0.0, 1.0];
    let ys = [0.0, 1.0];
    let z = vec![
        10.0, 0.0, //
        0.0, 10.0,
    ];

    let paths = extract_contours(&xs, &ys, &z, 5.0).unwrap();
    assert_eq!(paths.len(), 2);
    for path in &paths {
        assert_eq!(path.len(), 2);
        assert!(!path.is_closed(DEFAULT_STITCH_TOLERANCE));
    }
}

// ============================================================================
// Error and degenerate handling
// ============================================================================

#[test]
fn test_shape_mismatch() {
    let result = extract_contours(&[0.0, 1.0, 2.0], &[0.0, 1.0], &[0.0; 5], 0.5);
    match result {
        Err(GeomError::ShapeMismatch { x_len, y_len, z_len }) => {
            assert_eq!(x_len, 3);
            assert_eq!(y_len, 2);
            assert_eq!(z_len, 5);
        }
        other => panic!("expected shape mismatch, got {:?}", other),
    }
}

#[test]
fn test_single_row_grid_is_empty() {
    let paths = extract_contours(&[0.0, 1.0, 2.0], &[0.0], &[0.0, 1.0, 2.0], 0.5).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_empty_grid_is_empty() {
    let paths = extract_contours(&[], &[], &[], 0.5).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_nan_region_still_contours_rest() {
    let (xs, ys) = uniform_grid(21, 2.0);
    let mut z = sample(&xs, &ys, |x, y| 1.0 - (x * x + y * y));
    // Poison a corner region far away from the unit circle.
    z[0] = f64::NAN;
    z[1] = f64::NAN;

    let paths = extract_contours(&xs, &ys, &z, 0.0).unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].is_closed(DEFAULT_STITCH_TOLERANCE));
}

// ============================================================================
// Level sweeps
// ============================================================================

#[test]
fn test_level_sweep_over_cone() {
    let (xs, ys) = uniform_grid(41, 2.0);
    let z = sample(&xs, &ys, |x, y| 2.0 - (x * x + y * y).sqrt());

    let levels = generate_levels(0.25, 1.75, 0.5);
    assert_eq!(levels.len(), 3);

    let sweep = contour::extract_levels(&xs, &ys, &z, &levels).unwrap();
    for entry in &sweep {
        // Each ring of the cone is one closed loop.
        assert_eq!(entry.paths.len(), 1, "level {}", entry.level);
        assert!(entry.paths[0].is_closed(DEFAULT_STITCH_TOLERANCE));
    }
}
