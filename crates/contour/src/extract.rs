//! Top-level contour extraction entry points.

use geom_common::{GeomError, GeomResult, Polyline};
use serde::{Deserialize, Serialize};

use crate::march::march_squares;
use crate::stitch::{connect_segments, DEFAULT_STITCH_TOLERANCE};

/// Configuration for contour extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Endpoint quantization tolerance used when stitching segments into
    /// paths.
    pub stitch_tolerance: f64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            stitch_tolerance: DEFAULT_STITCH_TOLERANCE,
        }
    }
}

pub(crate) fn validate_grid(xs: &[f64], ys: &[f64], z: &[f64]) -> GeomResult<()> {
    if z.len() != xs.len() * ys.len() {
        return Err(GeomError::ShapeMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
            z_len: z.len(),
        });
    }
    Ok(())
}

/// Extract iso-level contours with the default configuration.
///
/// `xs` (length M) and `ys` (length N) are the grid's physical coordinates
/// and `z` holds N*M samples in row-major order (row = y). Returns the
/// stitched paths; a grid with fewer than two samples along either axis has
/// no cells and yields an empty list.
///
/// # Errors
///
/// [`GeomError::ShapeMismatch`] when `z.len() != xs.len() * ys.len()`.
pub fn extract_contours(
    xs: &[f64],
    ys: &[f64],
    z: &[f64],
    level: f64,
) -> GeomResult<Vec<Polyline>> {
    extract_contours_with(xs, ys, z, level, &ExtractConfig::default())
}

/// Extract iso-level contours with an explicit configuration.
pub fn extract_contours_with(
    xs: &[f64],
    ys: &[f64],
    z: &[f64],
    level: f64,
    config: &ExtractConfig,
) -> GeomResult<Vec<Polyline>> {
    validate_grid(xs, ys, z)?;
    Ok(extract_unchecked(xs, ys, z, level, config))
}

/// Extraction body shared with the level sweep; shape already validated.
pub(crate) fn extract_unchecked(
    xs: &[f64],
    ys: &[f64],
    z: &[f64],
    level: f64,
    config: &ExtractConfig,
) -> Vec<Polyline> {
    let segments = march_squares(xs, ys, z, level);
    let paths = connect_segments(&segments, config.stitch_tolerance);

    tracing::debug!(
        nx = xs.len(),
        ny = ys.len(),
        level,
        num_segments = segments.len(),
        num_paths = paths.len(),
        "extracted contours"
    );

    paths
}
