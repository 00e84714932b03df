//! Analysis options

use serde::{Deserialize, Serialize};

/// Options for linear static analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Relative pivot size below which the reduced stiffness matrix is
    /// treated as singular
    pub pivot_tolerance: f64,
    /// Check static equilibrium after analysis
    pub check_statics: bool,
    /// Largest acceptable free-DOF residual, relative to the largest load
    pub residual_tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            pivot_tolerance: 1e-12,
            check_statics: true,
            residual_tolerance: 1e-6,
        }
    }
}

impl AnalysisOptions {
    /// Create options for linear analysis
    pub fn linear() -> Self {
        Self::default()
    }

    /// Set the singular pivot tolerance
    pub fn with_pivot_tolerance(mut self, tol: f64) -> Self {
        self.pivot_tolerance = tol;
        self
    }

    /// Set the equilibrium residual tolerance
    pub fn with_residual_tolerance(mut self, tol: f64) -> Self {
        self.residual_tolerance = tol;
        self
    }

    /// Skip the equilibrium check after solving
    pub fn without_statics_check(mut self) -> Self {
        self.check_statics = false;
        self
    }
}
