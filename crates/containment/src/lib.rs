//! Point-in-polygon classification for infill and boundary trimming.
//!
//! Classifies batches of query points against a closed polygon with the
//! even-odd ray casting rule, so collaborators can decide which generated
//! lattice or hatch points belong inside a region before adding them to a
//! toolpath.

pub mod raycast;

pub use raycast::{point_in_polygon, points_in_polygon};
