//! Result types for frame analysis

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::math::Vector;
use crate::registry::NodeId;

/// Displacement results at a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X direction
    pub dx: f64,
    /// Displacement in Y direction
    pub dy: f64,
    /// Rotation (counter-clockwise positive)
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from array [DX, DY, RZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            rz: arr[2],
        }
    }

    /// Get translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Relative displacement between two nodes
impl Sub for NodeDisplacement {
    type Output = NodeDisplacement;

    fn sub(self, other: NodeDisplacement) -> NodeDisplacement {
        NodeDisplacement {
            dx: self.dx - other.dx,
            dy: self.dy - other.dy,
            rz: self.rz - other.rz,
        }
    }
}

/// Reaction forces at a supported node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in X direction
    pub fx: f64,
    /// Reaction force in Y direction
    pub fy: f64,
    /// Reaction moment (counter-clockwise positive)
    pub mz: f64,
}

impl Reactions {
    /// Create from array [FX, FY, MZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            mz: arr[2],
        }
    }

    /// Get total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        self.fx.hypot(self.fy)
    }
}

/// Internal forces at one end of a member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberForces {
    /// Axial force (positive = tension)
    pub axial: f64,
    /// Shear force in local y direction
    pub shear: f64,
    /// Bending moment
    pub moment: f64,
}

impl MemberForces {
    /// Create from local force array at i-node
    pub fn from_i_node_forces(forces: &[f64; 6]) -> Self {
        Self {
            axial: -forces[0],
            shear: forces[1],
            moment: forces[2],
        }
    }

    /// Create from local force array at j-node
    pub fn from_j_node_forces(forces: &[f64; 6]) -> Self {
        Self {
            axial: forces[3],
            shear: -forces[4],
            moment: forces[5],
        }
    }
}

/// Displacements and reactions of one solved frame
///
/// Both vectors have length 3N and are indexed by global DOF id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSolution {
    /// Global displacement vector; zero at every fixed DOF
    pub displacements: Vector,
    /// `K * d - F`; support reactions at fixed DOFs, equilibrium residual elsewhere
    pub reactions: Vector,
    /// Unrestrained DOFs, ascending
    pub free_dofs: Vec<usize>,
    /// Restrained DOFs, ascending
    pub fixed_dofs: Vec<usize>,
}

impl FrameSolution {
    /// Total number of DOFs
    pub fn dof_count(&self) -> usize {
        self.displacements.len()
    }

    /// Displacement of one node
    pub fn node_displacement(&self, node: NodeId) -> Option<NodeDisplacement> {
        self.node_triple(&self.displacements, node)
            .map(NodeDisplacement::from_array)
    }

    /// Reactions at one node
    pub fn node_reactions(&self, node: NodeId) -> Option<Reactions> {
        self.node_triple(&self.reactions, node).map(Reactions::from_array)
    }

    /// Largest absolute out-of-balance force at a free DOF
    pub fn max_free_residual(&self) -> f64 {
        self.free_dofs
            .iter()
            .map(|&dof| self.reactions[dof].abs())
            .fold(0.0, f64::max)
    }

    fn node_triple(&self, values: &Vector, node: NodeId) -> Option<[f64; 3]> {
        let [x, y, r] = node.dofs();
        (r < values.len()).then(|| [values[x], values[y], values[r]])
    }
}

/// Summary of analysis results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Maximum nodal translation
    pub max_displacement: f64,
    /// Node with maximum translation
    pub max_disp_node: Option<NodeId>,
    /// Maximum reaction force
    pub max_reaction: f64,
    /// Node with maximum reaction
    pub max_reaction_node: Option<NodeId>,
    /// Total number of nodes
    pub num_nodes: usize,
    /// Total number of members
    pub num_members: usize,
    /// Total DOFs
    pub total_dofs: usize,
    /// Free DOFs (unknown)
    pub free_dofs: usize,
}
