//! 3D rotations from three Euler angles, and back.
//!
//! # Convention
//!
//! Angles are in radians and matrices act on column vectors by premultiplication
//! (`v' = R * v`). The elementary rotations are the right-handed ones:
//!
//! ```text
//! Rx(a) = [1  0   0 ]   Ry(a) = [ c  0  s]   Rz(a) = [c  -s  0]
//!         [0  c  -s ]           [ 0  1  0]           [s   c  0]
//!         [0  s   c ]           [-s  0  c]           [0   0  1]
//! ```
//!
//! and the composed rotation is `R = Rz(rz) * (Ry(ry) * Rx(rx))`: a vector is rotated about X
//! first, then about Y, then about Z. [`make_rotation`] builds this matrix and
//! [`rotation_to_angles`] inverts it, returning `rx, rz` in `(-pi, pi]` and `ry` in
//! `[-pi/2, pi/2]`.

use tracc_linalg::{ops::multiply, Matrix};

use crate::error::TransformError;

/// Default tolerance on the orthonormality of a matrix passed to [`rotation_to_angles`].
pub const ROTATION_TOLERANCE: f64 = 1e-4;

// below this cos(ry) the X and Z axes are considered aligned
const GIMBAL_EPSILON: f64 = 1e-9;

/// Homogeneous 4x4 rotation about the X axis.
pub fn rotation_x(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    let mut m = Matrix::identity(4);
    m[(1, 1)] = c;
    m[(1, 2)] = -s;
    m[(2, 1)] = s;
    m[(2, 2)] = c;
    m
}

/// Homogeneous 4x4 rotation about the Y axis.
pub fn rotation_y(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    let mut m = Matrix::identity(4);
    m[(0, 0)] = c;
    m[(0, 2)] = s;
    m[(2, 0)] = -s;
    m[(2, 2)] = c;
    m
}

/// Homogeneous 4x4 rotation about the Z axis.
pub fn rotation_z(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    let mut m = Matrix::identity(4);
    m[(0, 0)] = c;
    m[(0, 1)] = -s;
    m[(1, 0)] = s;
    m[(1, 1)] = c;
    m
}

/// Compose a rotation from three angles.
///
/// # Arguments
///
/// * `rx` - The rotation about the X axis, applied first.
/// * `ry` - The rotation about the Y axis, applied second.
/// * `rz` - The rotation about the Z axis, applied last.
///
/// # Returns
///
/// A 4x4 homogeneous matrix holding `Rz * Ry * Rx` in its top-left 3x3 block.
///
/// Example:
///
/// ```
/// use tracc_transforms::rotation::make_rotation;
///
/// let r = make_rotation(0.0, 0.0, std::f64::consts::FRAC_PI_2);
/// // the X axis is mapped onto the Y axis
/// assert!((r[(1, 0)] - 1.0).abs() < 1e-12);
/// ```
pub fn make_rotation(rx: f64, ry: f64, rz: f64) -> Matrix {
    let ry_rx = multiply(&rotation_y(ry), &rotation_x(rx));
    multiply(&rotation_z(rz), &ry_rx)
}

/// Recover the angles `[rx, ry, rz]` that [`make_rotation`] turns into `r`.
///
/// Only the top-left 3x3 block of `r` is read, so both 3x3 and 4x4 homogeneous matrices are
/// accepted. At gimbal lock (`ry = +-pi/2`) the angle triple is not unique; `rz` is then set to
/// zero and the remaining rotation folded into `rx`.
///
/// # Errors
///
/// Returns [`TransformError::NotARotation`] if `r * r^T` differs from the identity, or
/// `det(r)` from one, by more than [`ROTATION_TOLERANCE`].
pub fn rotation_to_angles(r: &Matrix) -> Result<[f64; 3], TransformError> {
    rotation_to_angles_with_tolerance(r, ROTATION_TOLERANCE)
}

/// Same as [`rotation_to_angles`] with a custom orthonormality tolerance.
pub fn rotation_to_angles_with_tolerance(
    r: &Matrix,
    tolerance: f64,
) -> Result<[f64; 3], TransformError> {
    assert!(
        r.rows() >= 3 && r.cols() >= 3,
        "rotation_to_angles requires at least a 3x3 matrix, got {}x{}",
        r.rows(),
        r.cols()
    );

    let deviation = orthonormality_deviation(r);
    if !(deviation <= tolerance) {
        return Err(TransformError::NotARotation {
            deviation,
            tolerance,
        });
    }

    let sin_ry = (-r[(2, 0)]).clamp(-1.0, 1.0);
    let cos_ry = r[(0, 0)].hypot(r[(1, 0)]);
    let ry = sin_ry.atan2(cos_ry);

    let (rx, rz) = if cos_ry > GIMBAL_EPSILON {
        (r[(2, 1)].atan2(r[(2, 2)]), r[(1, 0)].atan2(r[(0, 0)]))
    } else if sin_ry > 0.0 {
        // R01 = sin(rx - rz), R11 = cos(rx - rz)
        (r[(0, 1)].atan2(r[(1, 1)]), 0.0)
    } else {
        // R01 = -sin(rx + rz), R11 = cos(rx + rz)
        ((-r[(0, 1)]).atan2(r[(1, 1)]), 0.0)
    };

    Ok([rx, ry, rz])
}

/// Largest of `max |R * R^T - I|` and `|det(R) - 1|` over the top-left 3x3 block.
fn orthonormality_deviation(r: &Matrix) -> f64 {
    let mut deviation: f64 = 0.0;
    for i in 0..3 {
        for j in 0..3 {
            let dot = (0..3).map(|k| r[(i, k)] * r[(j, k)]).sum::<f64>();
            let expected = if i == j { 1.0 } else { 0.0 };
            deviation = deviation.max((dot - expected).abs());
        }
    }

    let det = r[(0, 0)] * (r[(1, 1)] * r[(2, 2)] - r[(1, 2)] * r[(2, 1)])
        - r[(0, 1)] * (r[(1, 0)] * r[(2, 2)] - r[(1, 2)] * r[(2, 0)])
        + r[(0, 2)] * (r[(1, 0)] * r[(2, 1)] - r[(1, 1)] * r[(2, 0)]);

    // f64::max drops NaN operands
    if det.is_nan() {
        return f64::NAN;
    }
    deviation.max((det - 1.0).abs())
}
