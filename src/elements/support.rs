//! Support conditions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::elements::Point;
use crate::error::FrameError;

/// Direction a roller support restrains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollerOrientation {
    /// Restrains X translation; rolls along Y
    X,
    /// Restrains Y translation; rolls along X
    #[default]
    Y,
}

impl FromStr for RollerOrientation {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            other => Err(FrameError::InvalidInput(format!(
                "roller orientation must be \"x\" or \"y\", got \"{other}\""
            ))),
        }
    }
}

/// Kind of support at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportKind {
    /// All three DOFs restrained
    Fixed,
    /// Translations restrained, rotation free
    Hinged,
    /// One translation restrained
    Roller(RollerOrientation),
}

impl SupportKind {
    /// Restraint mask over `[DX, DY, RZ]`
    pub fn restraints(&self) -> [bool; 3] {
        match self {
            Self::Fixed => [true, true, true],
            Self::Hinged => [true, true, false],
            Self::Roller(RollerOrientation::X) => [true, false, false],
            Self::Roller(RollerOrientation::Y) => [false, true, false],
        }
    }

    /// Select the constrained DOFs from a node's `[tx, ty, rot]` triple
    pub fn constrained_dofs(&self, dofs: [usize; 3]) -> Vec<usize> {
        dofs.into_iter()
            .zip(self.restraints())
            .filter_map(|(dof, restrained)| restrained.then_some(dof))
            .collect()
    }

    /// Count number of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.restraints().iter().filter(|r| **r).count()
    }
}

impl fmt::Display for SupportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Hinged => write!(f, "Hinged"),
            Self::Roller(RollerOrientation::X) => write!(f, "Roller (x)"),
            Self::Roller(RollerOrientation::Y) => write!(f, "Roller (y)"),
        }
    }
}

/// A support placed at a point of the frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Where the support acts
    pub position: Point,
    /// Which DOFs it restrains
    pub kind: SupportKind,
}

impl Support {
    /// Create a support of the given kind
    pub fn new(position: Point, kind: SupportKind) -> Self {
        Self { position, kind }
    }

    /// Create a fully fixed support
    pub fn fixed(position: Point) -> Self {
        Self::new(position, SupportKind::Fixed)
    }

    /// Create a hinged (pinned) support
    pub fn hinged(position: Point) -> Self {
        Self::new(position, SupportKind::Hinged)
    }

    /// Create a roller support
    pub fn roller(position: Point, orientation: RollerOrientation) -> Self {
        Self::new(position, SupportKind::Roller(orientation))
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} support at {}", self.kind, self.position)
    }
}
