//! Section properties for frame elements

use serde::{Deserialize, Serialize};

/// Cross-section properties for in-plane frame elements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area
    pub a: f64,
    /// Second moment of area about the bending axis
    pub i: f64,
}

impl Section {
    /// Create a new section from area and second moment of area
    pub fn new(a: f64, i: f64) -> Self {
        Self { a, i }
    }

    /// Create a rectangular section bending about its width
    pub fn rectangular(width: f64, depth: f64) -> Self {
        Self {
            a: width * depth,
            i: width * depth.powi(3) / 12.0,
        }
    }

    /// Create a solid circular section
    pub fn circular(diameter: f64) -> Self {
        let r = diameter / 2.0;
        Self {
            a: std::f64::consts::PI * r.powi(2),
            i: std::f64::consts::PI * r.powi(4) / 4.0,
        }
    }
}

impl Default for Section {
    /// Unit area and second moment of area
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
