//! Member element - 2D frame element (beam-column)

use std::sync::{Arc, OnceLock};

use crate::elements::{Material, Point, Section};
use crate::error::{FrameError, FrameResult};
use crate::math::{self, round_to, Mat6, Vec6, GEOMETRY_DIGITS};

/// A 2D frame member with axial and bending stiffness
///
/// Geometry and properties are fixed at construction; every derived
/// matrix is a pure function of them.
#[derive(Debug, Clone)]
pub struct Member {
    begin: Point,
    end: Point,
    material: Arc<Material>,
    section: Arc<Section>,

    length: f64,
    cosine: f64,
    sine: f64,

    /// Global stiffness, filled on first access
    global_stiffness: OnceLock<Mat6>,
}

impl Member {
    /// Create a member with unit material and section properties
    pub fn new(begin: Point, end: Point) -> FrameResult<Self> {
        Self::with_properties(begin, end, Material::default(), Section::default())
    }

    /// Create a member with the given material and section
    ///
    /// Pass an `Arc` to share one record between several members.
    pub fn with_properties(
        begin: Point,
        end: Point,
        material: impl Into<Arc<Material>>,
        section: impl Into<Arc<Section>>,
    ) -> FrameResult<Self> {
        let length = begin.distance(&end);
        if length == 0.0 || !length.is_finite() {
            return Err(FrameError::DegenerateMember { begin, end });
        }

        // Direction cosines straight from the run and rise; a vertical
        // member gets cosine 0 and sine +-1 with no slope involved.
        let cosine = round_to((end.x - begin.x) / length, GEOMETRY_DIGITS);
        let sine = round_to((end.y - begin.y) / length, GEOMETRY_DIGITS);

        Ok(Self {
            begin,
            end,
            material: material.into(),
            section: section.into(),
            length,
            cosine,
            sine,
            global_stiffness: OnceLock::new(),
        })
    }

    /// Start point
    pub fn begin(&self) -> Point {
        self.begin
    }

    /// End point
    pub fn end(&self) -> Point {
        self.end
    }

    /// Material shared with any other member holding the same `Arc`
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Section shared with any other member holding the same `Arc`
    pub fn section(&self) -> &Arc<Section> {
        &self.section
    }

    /// Member length, rounded to 10 decimal digits
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Direction cosine of the member axis (begin to end)
    pub fn cosine(&self) -> f64 {
        self.cosine
    }

    /// Direction sine of the member axis (begin to end)
    pub fn sine(&self) -> f64 {
        self.sine
    }

    /// Direction cosine and sine as a pair
    pub fn orientation(&self) -> (f64, f64) {
        (self.cosine, self.sine)
    }

    /// Axial rigidity EA
    pub fn ea(&self) -> f64 {
        self.material.e * self.section.a
    }

    /// Flexural rigidity EI
    pub fn ei(&self) -> f64 {
        self.material.e * self.section.i
    }

    /// Stiffness matrix in member-local axes
    pub fn local_stiffness(&self) -> Mat6 {
        math::member_local_stiffness(self.material.e, self.section.a, self.section.i, self.length)
    }

    /// Rotation from global (x, y, rotation) to local (axial, transverse, rotation)
    pub fn transformation_matrix(&self) -> Mat6 {
        math::member_transformation_matrix(self.cosine, self.sine)
    }

    /// Stiffness matrix in global axes: `T^T * K_local * T`
    pub fn global_stiffness(&self) -> Mat6 {
        *self.global_stiffness.get_or_init(|| {
            let t = self.transformation_matrix();
            t.transpose() * self.local_stiffness() * t
        })
    }

    /// Local end forces for the given global end displacements
    ///
    /// `d_global` is `[dx_i, dy_i, rz_i, dx_j, dy_j, rz_j]`; the result is
    /// `[N_i, V_i, M_i, N_j, V_j, M_j]` in member axes.
    pub fn end_forces(&self, d_global: &Vec6) -> Vec6 {
        self.local_stiffness() * (self.transformation_matrix() * d_global)
    }
}
