//! Error types for the toolpath geometry kernel.

use thiserror::Error;

/// Result type alias using GeomError.
pub type GeomResult<T> = Result<T, GeomError>;

/// Primary error type for geometry operations.
///
/// Degenerate-but-valid inputs (grids with fewer than two samples along an
/// axis, polygons with fewer than three vertices) are not errors; they
/// produce empty results instead.
#[derive(Debug, Error)]
pub enum GeomError {
    /// Grid coordinate lengths disagree with the scalar field's dimensions.
    #[error("grid shape mismatch: x has {x_len} elements, y has {y_len} elements, but the field has {z_len} samples")]
    ShapeMismatch {
        x_len: usize,
        y_len: usize,
        z_len: usize,
    },
}
