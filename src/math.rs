//! Mathematical utilities for frame calculations

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

pub type Mat = DMatrix<f64>;
pub type Vector = DVector<f64>;

/// 6x6 matrix for member stiffness and transformation
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-element vector for member end forces/displacements
pub type Vec6 = SVector<f64, 6>;

/// Number of decimal digits kept for geometric quantities
pub const GEOMETRY_DIGITS: i32 = 10;

/// Round `value` to a fixed number of decimal digits
///
/// Used on lengths, slopes and direction cosines so that floating noise
/// (e.g. `cos(90°) = 6.1e-17`) does not leak into the stiffness terms.
pub fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Compute the local stiffness matrix for a 2D frame element
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `i` - Second moment of area
/// * `length` - Member length
///
/// # Returns
/// 6x6 local stiffness matrix over (axial, shear, moment) at each end
pub fn member_local_stiffness(e: f64, a: f64, i: f64, length: f64) -> Mat6 {
    let l = length;

    let t1 = e * a / l;
    let t2 = 12.0 * e * i / l.powi(3);
    let t3 = 6.0 * e * i / l.powi(2);
    let t4 = 4.0 * e * i / l;
    let t5 = 2.0 * e * i / l;

    #[rustfmt::skip]
    let data = [
        t1,   0.0,  0.0,  -t1,  0.0,  0.0,
        0.0,  t2,   t3,   0.0,  -t2,  t3,
        0.0,  t3,   t4,   0.0,  -t3,  t5,
        -t1,  0.0,  0.0,  t1,   0.0,  0.0,
        0.0,  -t2,  -t3,  0.0,  t2,   -t3,
        0.0,  t3,   t5,   0.0,  -t3,  t4,
    ];

    Mat6::from_row_slice(&data)
}

/// Compute the transformation matrix for a 2D frame element
///
/// Maps global (x, y, rotation) end displacements onto local
/// (axial, transverse, rotation) ones: `d_local = T * d_global`.
///
/// # Arguments
/// * `cosine` - Direction cosine of the member axis
/// * `sine` - Direction sine of the member axis
pub fn member_transformation_matrix(cosine: f64, sine: f64) -> Mat6 {
    let l = cosine;
    let m = sine;

    #[rustfmt::skip]
    let data = [
        l,    m,    0.0,  0.0,  0.0,  0.0,
        -m,   l,    0.0,  0.0,  0.0,  0.0,
        0.0,  0.0,  1.0,  0.0,  0.0,  0.0,
        0.0,  0.0,  0.0,  l,    m,    0.0,
        0.0,  0.0,  0.0,  -m,   l,    0.0,
        0.0,  0.0,  0.0,  0.0,  0.0,  1.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Delete the given DOFs from a stiffness matrix and load vector
///
/// Rows/columns are removed from the highest index down, so each removal
/// leaves the indices still to be removed untouched.
pub fn remove_dofs(k: &Mat, f: &Vector, dofs: &[usize]) -> (Mat, Vector) {
    let mut descending = dofs.to_vec();
    descending.sort_unstable_by(|a, b| b.cmp(a));
    descending.dedup();

    let mut k = k.clone();
    let mut f = f.clone();
    for &dof in &descending {
        k = k.remove_row(dof).remove_column(dof);
        f = f.remove_row(dof);
    }

    (k, f)
}

/// Scatter a reduced vector back into a zeroed vector of length `size`
///
/// `reduced[n]` lands at `positions[n]`.
pub fn expand(reduced: &Vector, positions: &[usize], size: usize) -> Vector {
    let mut full = Vector::zeros(size);
    for (value, &dof) in reduced.iter().zip(positions) {
        full[dof] = *value;
    }
    full
}

/// Solve a linear system using LU decomposition
///
/// Returns `None` when a pivot is zero or smaller than `pivot_tolerance`
/// times the largest pivot, or when the solution is not finite.
pub fn solve_linear_system(a: &Mat, b: &Vector, pivot_tolerance: f64) -> Option<Vector> {
    let lu = a.clone().lu();

    let pivots = lu.u().diagonal();
    let largest = pivots.amax();
    if largest == 0.0 || pivots.iter().any(|p| p.abs() <= pivot_tolerance * largest) {
        return None;
    }

    lu.solve(b).filter(|x| x.iter().all(|v| v.is_finite()))
}

/// Check whether a square matrix is symmetric within a relative tolerance
pub fn is_symmetric(m: &Mat, tolerance: f64) -> bool {
    if !m.is_square() {
        return false;
    }
    let scale = m.amax().max(1.0);
    let n = m.nrows();
    (0..n).all(|i| (i + 1..n).all(|j| (m[(i, j)] - m[(j, i)]).abs() <= tolerance * scale))
}
