//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for frame analysis
///
/// Units are whatever the caller uses consistently for the whole model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus)
    pub e: f64,
}

impl Material {
    /// Create a new material with the given elastic modulus
    pub fn new(e: f64) -> Self {
        Self { e }
    }

    /// Structural steel in Pa
    pub fn steel() -> Self {
        Self::new(200e9)
    }

    /// Aluminum (6061-T6) in Pa
    pub fn aluminum() -> Self {
        Self::new(68.9e9)
    }
}

impl Default for Material {
    /// Unit modulus
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_is_unit() {
        assert_eq!(Material::default().e, 1.0);
    }

    #[test]
    fn test_steel_properties() {
        assert_eq!(Material::steel().e, 200e9);
    }
}
