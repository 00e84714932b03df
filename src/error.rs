//! Error types for the frame solver

use thiserror::Error;

use crate::elements::Point;

/// Main error type for frame modelling and analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Point {0} is not registered in the frame")]
    UnregisteredPoint(Point),

    #[error("Point {0} is already registered")]
    DuplicateRegistration(Point),

    #[error("Member from {begin} to {end} has zero length")]
    DegenerateMember { begin: Point, end: Point },

    #[error("Point {0} already has a support")]
    OverConstrainedPoint(Point),

    #[error("Singular stiffness matrix ({free_dofs} free DOFs) - structure is unstable or has insufficient supports")]
    SingularSystem { free_dofs: usize },

    #[error("Node {0} does not exist in this frame")]
    UnknownNode(usize),

    #[error("Member {0} does not exist in this frame")]
    UnknownMember(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for frame operations
pub type FrameResult<T> = Result<T, FrameError>;
