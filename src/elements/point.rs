//! Point - a location in the 2D model plane

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{round_to, GEOMETRY_DIGITS};

/// A 2D point in the frame model
///
/// Two points with identical coordinates are the same node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point at the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculate distance to another point, rounded to 10 decimal digits
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        round_to((dx * dx + dy * dy).sqrt(), GEOMETRY_DIGITS)
    }

    /// Slope of the line towards `other`
    ///
    /// Returns `f64::INFINITY` when both points share the same x coordinate.
    pub fn slope(&self, other: &Point) -> f64 {
        if self.x == other.x {
            return f64::INFINITY;
        }
        round_to((other.y - self.y) / (other.x - self.x), GEOMETRY_DIGITS)
    }

    /// A copy of this point translated by `(dx, dy)`
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
