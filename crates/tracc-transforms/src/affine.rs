//! Composition of 3D affine transforms from center, translation, scale and rotation.
//!
//! The forward transform is
//!
//! ```text
//! M = T(c + t) * S * R * T(-c)
//! ```
//!
//! with `S = diag(scale)` and `R` built by [`make_rotation`]: points are moved so that the
//! center sits at the origin, rotated, scaled per axis, moved back to the center and finally
//! translated by `t`. The center is the only fixed point of the scale and rotation part.

use tracc_linalg::{
    ops::{multiply, transpose_in_place},
    Matrix,
};

use crate::{homogeneous::translation_to_homogeneous, rotation::make_rotation};

/// Rows 0 to 2 of a 4x4 homogeneous matrix; the implied last row is `[0, 0, 0, 1]`.
pub type AffineMatrix = [[f64; 4]; 3];

/// The compact parameters of a 3D affine transform.
///
/// Shear is carried for completeness but is never applied by [`build_forward`] and always
/// zero when returned by the decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineParameters {
    /// Center of rotation and scaling.
    pub center: [f64; 3],
    /// Translation applied after rotation and scaling.
    pub translation: [f64; 3],
    /// Per-axis scale factors.
    pub scale: [f64; 3],
    /// Shear factors, ignored.
    pub shear: [f64; 3],
    /// Rotation angles about X, Y and Z in radians.
    pub rotation: [f64; 3],
}

impl Default for AffineParameters {
    fn default() -> Self {
        Self {
            center: [0.0; 3],
            translation: [0.0; 3],
            scale: [1.0; 3],
            shear: [0.0; 3],
            rotation: [0.0; 3],
        }
    }
}

// S * R as a homogeneous 4x4 matrix
fn scale_rotation(params: &AffineParameters) -> Matrix {
    let [rx, ry, rz] = params.rotation;
    let r = make_rotation(rx, ry, rz);

    let mut s = Matrix::identity(4);
    for i in 0..3 {
        s[(i, i)] = params.scale[i];
    }

    multiply(&s, &r)
}

fn offset(a: &[f64; 3], b: &[f64; 3], sign: f64) -> [f64; 3] {
    [a[0] + sign * b[0], a[1] + sign * b[1], a[2] + sign * b[2]]
}

/// Build the forward transform `T(c + t) * S * R * T(-c)`.
///
/// # Arguments
///
/// * `params` - The transform parameters. `params.shear` is ignored.
///
/// # Returns
///
/// The top three rows of the homogeneous matrix.
///
/// Example:
///
/// ```
/// use tracc_transforms::affine::{build_forward, transform_point, AffineParameters};
///
/// let params = AffineParameters {
///     center: [10.0, 0.0, 0.0],
///     scale: [2.0, 1.0, 1.0],
///     ..Default::default()
/// };
/// let m = build_forward(&params);
/// let p = transform_point(&m, &[11.0, 0.0, 0.0]);
/// assert!((p[0] - 12.0).abs() < 1e-12);
/// ```
pub fn build_forward(params: &AffineParameters) -> AffineMatrix {
    let c = params.center;
    let neg_c = [-c[0], -c[1], -c[2]];

    let to_origin = translation_to_homogeneous(3, &neg_c);
    let back_and_shift = translation_to_homogeneous(3, &offset(&params.translation, &c, 1.0));

    let m = multiply(&scale_rotation(params), &to_origin);
    let m = multiply(&back_and_shift, &m);

    from_homogeneous(&m)
}

/// Build the approximate inverse transform `T(c) * (S * R)^T * T(-t - c)`.
///
/// The transpose of `S * R` stands in for its inverse. The result is the exact inverse of
/// [`build_forward`] only when `S * R` is orthonormal, i.e. for unit scale; with any other
/// scale the linear part is `R^T * S` rather than `R^T * S^-1`.
pub fn build_inverse(params: &AffineParameters) -> AffineMatrix {
    let c = params.center;
    let neg_t_c = [
        -params.translation[0] - c[0],
        -params.translation[1] - c[1],
        -params.translation[2] - c[2],
    ];

    let mut sr_t = scale_rotation(params);
    transpose_in_place(&mut sr_t);

    let m = multiply(&sr_t, &translation_to_homogeneous(3, &neg_t_c));
    let m = multiply(&translation_to_homogeneous(3, &c), &m);

    from_homogeneous(&m)
}

/// Expand an [`AffineMatrix`] to a 4x4 homogeneous [`Matrix`] with last row `[0, 0, 0, 1]`.
pub fn to_homogeneous(m: &AffineMatrix) -> Matrix {
    let mut h = Matrix::identity(4);
    for (i, row) in m.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            h[(i, j)] = *v;
        }
    }
    h
}

/// Take the top three rows of a 4x4 homogeneous matrix.
pub fn from_homogeneous(h: &Matrix) -> AffineMatrix {
    assert_eq!(
        h.shape(),
        (4, 4),
        "expected a 4x4 homogeneous matrix, got {}x{}",
        h.rows(),
        h.cols()
    );

    let mut m = [[0.0; 4]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        row.copy_from_slice(h.row(i));
    }
    m
}

/// Apply an [`AffineMatrix`] to a 3D point.
pub fn transform_point(m: &AffineMatrix, point: &[f64; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (o, row) in out.iter_mut().zip(m.iter()) {
        *o = row[0] * point[0] + row[1] * point[1] + row[2] * point[2] + row[3];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tracc_linalg::ops::invert;

    fn assert_affine_eq(a: &AffineMatrix, b: &AffineMatrix, epsilon: f64) {
        for i in 0..3 {
            for j in 0..4 {
                assert_relative_eq!(a[i][j], b[i][j], epsilon = epsilon);
            }
        }
    }

    const IDENTITY: AffineMatrix = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ];

    #[test]
    fn test_build_forward_identity_any_center() {
        for center in [[0.0; 3], [10.0, -3.0, 2.5], [-100.0, 0.1, 42.0]] {
            let params = AffineParameters {
                center,
                ..Default::default()
            };
            assert_affine_eq(&build_forward(&params), &IDENTITY, 1e-12);
        }
    }

    #[test]
    fn test_build_forward_pure_translation() {
        let params = AffineParameters {
            translation: [1.0, 2.0, 3.0],
            ..Default::default()
        };
        let m = build_forward(&params);
        assert_eq!(
            m,
            [
                [1.0, 0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0, 2.0],
                [0.0, 0.0, 1.0, 3.0],
            ]
        );
    }

    #[test]
    fn test_build_forward_scale_about_center() {
        let params = AffineParameters {
            center: [10.0, 0.0, 0.0],
            scale: [2.0, 1.0, 1.0],
            ..Default::default()
        };
        let m = build_forward(&params);
        let p = transform_point(&m, &[11.0, 0.0, 0.0]);
        assert_relative_eq!(p[0], 12.0);
        assert_relative_eq!(p[1], 0.0);
        assert_relative_eq!(p[2], 0.0);

        // the center does not move
        let p = transform_point(&m, &[10.0, 0.0, 0.0]);
        assert_relative_eq!(p[0], 10.0);
    }

    #[test]
    fn test_build_forward_ignores_shear() {
        let params = AffineParameters {
            center: [1.0, 2.0, 3.0],
            translation: [0.5, 0.0, -1.0],
            rotation: [0.1, 0.2, 0.3],
            ..Default::default()
        };
        let sheared = AffineParameters {
            shear: [0.3, 0.2, 0.1],
            ..params
        };
        assert_eq!(build_forward(&params), build_forward(&sheared));
    }

    #[test]
    fn test_build_forward_rotation_about_center() {
        let params = AffineParameters {
            center: [1.0, 1.0, 0.0],
            rotation: [0.0, 0.0, std::f64::consts::FRAC_PI_2],
            translation: [0.0, 0.0, 5.0],
            ..Default::default()
        };
        let m = build_forward(&params);
        // (2, 1, 0) is one unit along x from the center, rotated onto y
        let p = transform_point(&m, &[2.0, 1.0, 0.0]);
        assert_relative_eq!(p[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(p[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(p[2], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_build_inverse_exact_for_unit_scale() {
        let params = AffineParameters {
            center: [5.0, -2.0, 1.0],
            translation: [1.0, 2.0, 3.0],
            rotation: [0.3, -0.2, 1.1],
            ..Default::default()
        };
        let forward = to_homogeneous(&build_forward(&params));
        let inverse = to_homogeneous(&build_inverse(&params));
        let product = from_homogeneous(&multiply(&inverse, &forward));
        assert_affine_eq(&product, &IDENTITY, 1e-12);
    }

    #[test]
    fn test_build_inverse_uses_transpose_for_scale() -> Result<(), Box<dyn std::error::Error>> {
        let params = AffineParameters {
            scale: [2.0, 1.0, 1.0],
            ..Default::default()
        };
        let inverse = build_inverse(&params);
        // (S R)^T keeps the factor 2 where a true inverse would have 0.5
        assert_relative_eq!(inverse[0][0], 2.0);

        let true_inverse = from_homogeneous(&invert(&to_homogeneous(&build_forward(&params)))?);
        assert_relative_eq!(true_inverse[0][0], 0.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_homogeneous_conversion() {
        let m = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
        ];
        let h = to_homogeneous(&m);
        assert_eq!(h.row(3), &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(from_homogeneous(&h), m);
    }
}
