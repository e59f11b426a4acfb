//! Common geometry types shared across the toolpath kernel crates.

pub mod bbox;
pub mod error;
pub mod path;

pub use bbox::BoundingBox;
pub use error::{GeomError, GeomResult};
pub use path::{Point, Polyline, Segment};
