//! Level generation and multi-level contour sweeps.
//!
//! A toolpath pipeline slices the same field at many heights; the sweep
//! validates the grid once and extracts each level with shared machinery.

use geom_common::{GeomResult, Polyline};
use serde::{Deserialize, Serialize};

use crate::extract::{extract_unchecked, validate_grid, ExtractConfig};

/// Generate contour levels covering `[min_value, max_value]` at a fixed
/// interval, starting from the first multiple of `interval` at or above
/// `min_value`. Returns an empty list for a non-positive interval or an
/// empty range.
pub fn generate_levels(min_value: f64, max_value: f64, interval: f64) -> Vec<f64> {
    if interval <= 0.0 || max_value <= min_value {
        return Vec::new();
    }

    let start = (min_value / interval).ceil() * interval;
    let mut levels = Vec::new();

    let mut level = start;
    while level <= max_value {
        levels.push(level);
        level += interval;
    }

    levels
}

/// Contours extracted at one level of a sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelPaths {
    pub level: f64,
    pub paths: Vec<Polyline>,
}

/// Extract contours for every level with the default configuration.
///
/// # Errors
///
/// [`geom_common::GeomError::ShapeMismatch`] when `z.len()` disagrees with
/// `xs.len() * ys.len()`.
pub fn extract_levels(
    xs: &[f64],
    ys: &[f64],
    z: &[f64],
    levels: &[f64],
) -> GeomResult<Vec<LevelPaths>> {
    extract_levels_with(xs, ys, z, levels, &ExtractConfig::default())
}

/// Extract contours for every level with an explicit configuration.
pub fn extract_levels_with(
    xs: &[f64],
    ys: &[f64],
    z: &[f64],
    levels: &[f64],
    config: &ExtractConfig,
) -> GeomResult<Vec<LevelPaths>> {
    validate_grid(xs, ys, z)?;

    Ok(levels
        .iter()
        .map(|&level| LevelPaths {
            level,
            paths: extract_unchecked(xs, ys, z, level, config),
        })
        .collect())
}
