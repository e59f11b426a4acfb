//! Iso-level contour extraction from gridded scalar fields.
//!
//! Given grid coordinates, a scalar field sampled on the grid, and a level,
//! this crate produces polylines approximating the level set:
//! 1. every cell is classified by which corners sit at or above the level
//!    (marching squares), emitting 0-2 line segments per cell with crossing
//!    points linearly interpolated along cell edges;
//! 2. the unordered segment soup is stitched into maximal paths by hashing
//!    quantized endpoints, so floating-point-near-equal endpoints from
//!    neighboring cells land in the same bucket.
//!
//! Closed level-set components come back as a single path whose endpoints
//! coincide within the stitch tolerance; callers detect loops with
//! [`geom_common::Polyline::is_closed`].

pub mod extract;
pub mod levels;
pub mod march;
pub mod stitch;

pub use extract::{extract_contours, extract_contours_with, ExtractConfig};
pub use levels::{extract_levels, extract_levels_with, generate_levels, LevelPaths};
pub use march::{march_squares, EDGE_TABLE};
pub use stitch::{connect_segments, DEFAULT_STITCH_TOLERANCE};
