//! Frame Solver - 2D frame analysis by the direct stiffness method
//!
//! This library computes the linear-elastic response of plane frames:
//! - Beam-column members with axial and bending stiffness
//! - Fixed, hinged and roller supports
//! - Nodal forces and moments
//! - Nodal displacements, support reactions and member end forces
//!
//! ## Example
//! ```rust
//! use frame_solver::prelude::*;
//!
//! let base = Point::new(0.0, 0.0);
//! let tip = Point::new(5.0, 0.0);
//!
//! // Register the nodes
//! let mut frame = Frame::new([base, tip]).unwrap();
//!
//! // Add member
//! let member = Member::with_properties(
//!     base,
//!     tip,
//!     Material::steel(),
//!     Section::rectangular(0.3, 0.5),
//! )
//! .unwrap();
//! frame.add_members([member]).unwrap();
//!
//! // Add supports and loads
//! frame.add_supports([Support::fixed(base)]).unwrap();
//! frame.add_loads([NodeLoad::force(0.0, -10_000.0, tip)]).unwrap();
//!
//! // Analyze
//! let solution = frame.solve().unwrap();
//!
//! // Get results
//! let displacement = solution
//!     .node_displacement(frame.node_id(&tip).unwrap())
//!     .unwrap();
//! assert!(displacement.dy < 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod frame;
pub mod loads;
pub mod math;
pub mod registry;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::AnalysisOptions;
    pub use crate::elements::{Material, Member, Point, RollerOrientation, Section, Support, SupportKind};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::frame::Frame;
    pub use crate::loads::NodeLoad;
    pub use crate::registry::{DofRegistry, NodeId, DOFS_PER_NODE};
    pub use crate::results::{AnalysisSummary, FrameSolution, MemberForces, NodeDisplacement, Reactions};
}
