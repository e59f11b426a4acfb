//! Point, segment and polyline types for contour and containment geometry.

use serde::{Deserialize, Serialize};

use crate::BoundingBox;

/// A point in 2D machine coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// An ordered sequence of points forming an open or closed polyline.
///
/// Produced by contour extraction; whether a polyline is a closed loop is
/// decided by comparing its endpoints, see [`Polyline::is_closed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points in the polyline.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the first and last point coincide within `tolerance`.
    ///
    /// A polyline with fewer than three points is never considered closed.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        first.distance(&last) < tolerance
    }

    /// Total arc length along the polyline.
    pub fn length(&self) -> f64 {
        let mut length = 0.0;
        for pair in self.points.windows(2) {
            length += pair[0].distance(&pair[1]);
        }
        length
    }

    /// Axis-aligned bounding box of the points, or `None` if empty.
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }
}
