//! Homogeneous transforms of arbitrary dimension.
//!
//! An `n`-dimensional affine map is held as an `(n + 1) x (n + 1)` matrix acting on augmented
//! column vectors `[x, 1]` by premultiplication. The last row is not enforced by the matrix
//! type; every builder here writes it explicitly as `[0, ..., 0, 1]`.

use tracc_linalg::{
    ops::{multiply, scalar_multiply},
    Matrix,
};

use crate::rotation::{make_rotation, rotation_z};

/// Build the homogeneous matrix of a pure translation.
///
/// # Arguments
///
/// * `ndim` - The number of spatial dimensions.
/// * `translation` - The translation vector of length `ndim`.
///
/// # Returns
///
/// An `(ndim + 1) x (ndim + 1)` matrix.
///
/// Example:
///
/// ```
/// use tracc_transforms::homogeneous::translation_to_homogeneous;
///
/// let t = translation_to_homogeneous(2, &[3.0, -1.0]);
/// assert_eq!(t.row(0), &[1.0, 0.0, 3.0]);
/// assert_eq!(t.row(1), &[0.0, 1.0, -1.0]);
/// assert_eq!(t.row(2), &[0.0, 0.0, 1.0]);
/// ```
pub fn translation_to_homogeneous(ndim: usize, translation: &[f64]) -> Matrix {
    assert_eq!(
        translation.len(),
        ndim,
        "translation of length {} does not match {ndim} dimensions",
        translation.len()
    );

    let mut m = Matrix::identity(ndim + 1);
    for (i, t) in translation.iter().enumerate() {
        m[(i, ndim)] = *t;
    }
    m
}

/// Embed an `ndim x ndim` matrix into a homogeneous matrix.
///
/// The matrix need not be a rotation; any linear map is accepted. The last row and column are
/// zero except for the corner, which is one.
pub fn rotation_to_homogeneous(ndim: usize, rotation: &Matrix) -> Matrix {
    assert_eq!(
        rotation.shape(),
        (ndim, ndim),
        "expected a {ndim}x{ndim} matrix, got {}x{}",
        rotation.rows(),
        rotation.cols()
    );

    let mut m = Matrix::zeros(ndim + 1, ndim + 1);
    for i in 0..ndim {
        for j in 0..ndim {
            m[(i, j)] = rotation[(i, j)];
        }
    }
    m[(ndim, ndim)] = 1.0;
    m
}

/// Compose a translation, a linear map about a center and a global scale.
///
/// Applied to a point the resulting matrix performs, in order:
///
/// 1. translate by `translation`,
/// 2. translate by `-center`,
/// 3. apply `scale * rotation`,
/// 4. translate by `+center`.
///
/// so `M = T(center) * (scale * R) * T(-center) * T(translation)`.
///
/// # Arguments
///
/// * `ndim` - The number of spatial dimensions.
/// * `translation` - The translation applied first, of length `ndim`.
/// * `center` - The center of rotation and scaling, of length `ndim`.
/// * `rotation` - An `ndim x ndim` linear map, usually a rotation.
/// * `scale` - A global scale factor.
pub fn compose_trs(
    ndim: usize,
    translation: &[f64],
    center: &[f64],
    rotation: &Matrix,
    scale: f64,
) -> Matrix {
    let to_translation = translation_to_homogeneous(ndim, translation);

    let neg_center = center.iter().map(|c| -c).collect::<Vec<_>>();
    let to_origin = translation_to_homogeneous(ndim, &neg_center);

    let scaled_rotation = rotation_to_homogeneous(ndim, &scalar_multiply(rotation, scale));

    let from_origin = translation_to_homogeneous(ndim, center);

    let m = multiply(&to_origin, &to_translation);
    let m = multiply(&scaled_rotation, &m);
    multiply(&from_origin, &m)
}

/// Build a homogeneous rotation from angles in radians.
///
/// * `ndim == 2`: a planar rotation by `angles[0]`.
/// * `ndim == 3`: [`make_rotation`] of `angles[0..3]` (X, then Y, then Z).
///
/// PRECONDITION: `ndim` is 2 or 3; any other dimension panics.
pub fn angles_to_homogeneous(ndim: usize, angles: &[f64]) -> Matrix {
    let rotation = match ndim {
        2 => {
            assert!(!angles.is_empty(), "a planar rotation needs one angle");
            rotation_z(angles[0])
        }
        3 => {
            assert!(
                angles.len() >= 3,
                "a 3D rotation needs three angles, got {}",
                angles.len()
            );
            make_rotation(angles[0], angles[1], angles[2])
        }
        _ => panic!("cannot build a rotation from angles in {ndim} dimensions"),
    };

    rotation_to_homogeneous(ndim, &rotation.block(0, 0, ndim, ndim))
}
