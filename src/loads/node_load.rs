//! Node loads - forces and moments applied directly to nodes

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::elements::Point;

/// A load applied directly to a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Force in X direction
    pub fx: f64,
    /// Force in Y direction
    pub fy: f64,
    /// Moment about the out-of-plane axis (counter-clockwise positive)
    pub m: f64,
    /// Point the load acts on
    pub position: Point,
}

impl NodeLoad {
    /// Create a new node load with all components
    pub fn new(fx: f64, fy: f64, m: f64, position: Point) -> Self {
        Self { fx, fy, m, position }
    }

    /// Create a force-only node load
    pub fn force(fx: f64, fy: f64, position: Point) -> Self {
        Self::new(fx, fy, 0.0, position)
    }

    /// Create a moment-only node load
    pub fn moment(m: f64, position: Point) -> Self {
        Self::new(0.0, 0.0, m, position)
    }

    /// Get the load as an array [FX, FY, MZ]
    pub fn as_array(&self) -> [f64; 3] {
        [self.fx, self.fy, self.m]
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.fx * factor, self.fy * factor, self.m * factor, self.position)
    }
}

/// Component-wise sum; the result keeps the left-hand position
impl Add for NodeLoad {
    type Output = NodeLoad;

    fn add(self, other: NodeLoad) -> NodeLoad {
        NodeLoad::new(
            self.fx + other.fx,
            self.fy + other.fy,
            self.m + other.m,
            self.position,
        )
    }
}

impl Sub for NodeLoad {
    type Output = NodeLoad;

    fn sub(self, other: NodeLoad) -> NodeLoad {
        self + (-other)
    }
}

impl Neg for NodeLoad {
    type Output = NodeLoad;

    fn neg(self) -> NodeLoad {
        self.scaled(-1.0)
    }
}
