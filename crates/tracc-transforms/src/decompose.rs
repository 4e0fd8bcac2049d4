use tracc_linalg::{
    ops::{apply, invert_with_threshold, multiply, SINGULAR_VALUE_RATIO},
    Matrix,
};

use crate::{
    affine::{to_homogeneous, AffineMatrix, AffineParameters},
    error::TransformError,
    homogeneous::translation_to_homogeneous,
    rotation::{rotation_to_angles_with_tolerance, ROTATION_TOLERANCE},
};

/// Tolerances used when recovering parameters from a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecomposeConfig {
    /// Singular values below `max(w) * singular_value_ratio` are ignored when inverting the
    /// scale and rotation block.
    pub singular_value_ratio: f64,
    /// Largest accepted deviation of the recovered rotation block from orthonormality.
    pub rotation_tolerance: f64,
}

impl Default for DecomposeConfig {
    fn default() -> Self {
        Self {
            singular_value_ratio: SINGULAR_VALUE_RATIO,
            rotation_tolerance: ROTATION_TOLERANCE,
        }
    }
}

/// Recover translation, scale and rotation from an affine matrix, given its center.
///
/// The matrix is assumed to be of the form produced by
/// [`build_forward`](crate::affine::build_forward), `T(c + t) * S * R * T(-c)`, with no
/// shear. The returned parameters carry `center` unchanged and a zero shear.
///
/// # Arguments
///
/// * `m` - The affine matrix.
/// * `center` - The center of rotation and scaling to decompose about.
///
/// # Errors
///
/// Returns [`TransformError::NotARotation`] when the block left after removing the scale is
/// not a rotation, e.g. for a sheared or reflected input. No partial result is returned.
///
/// Example:
///
/// ```
/// use tracc_transforms::affine::{build_forward, AffineParameters};
/// use tracc_transforms::decompose::extract_parameters;
///
/// let params = AffineParameters {
///     center: [1.0, 2.0, 3.0],
///     translation: [4.0, 5.0, 6.0],
///     scale: [1.5, 0.5, 2.0],
///     rotation: [0.1, -0.2, 0.3],
///     ..Default::default()
/// };
/// let recovered = extract_parameters(&build_forward(&params), &params.center).unwrap();
/// assert!((recovered.scale[0] - 1.5).abs() < 1e-9);
/// assert!((recovered.rotation[2] - 0.3).abs() < 1e-9);
/// ```
pub fn extract_parameters(
    m: &AffineMatrix,
    center: &[f64; 3],
) -> Result<AffineParameters, TransformError> {
    extract_parameters_with_config(m, center, &DecomposeConfig::default())
}

/// Same as [`extract_parameters`] with explicit tolerances.
pub fn extract_parameters_with_config(
    m: &AffineMatrix,
    center: &[f64; 3],
    config: &DecomposeConfig,
) -> Result<AffineParameters, TransformError> {
    let xmat = to_homogeneous(m);

    // the center is the only fixed point of S * R, whatever moves it is the translation
    let moved = multiply(
        &xmat,
        &Matrix::column_vector(&[center[0], center[1], center[2], 1.0]),
    );
    let moved = moved.as_slice();
    let translation = [
        moved[0] - center[0],
        moved[1] - center[1],
        moved[2] - center[2],
    ];
    log::debug!("extracted translation {translation:?} about center {center:?}");

    // SR = T(-c) * T(-t) * M * T(c)
    let t_inv = translation_to_homogeneous(3, &[-translation[0], -translation[1], -translation[2]]);
    let c = translation_to_homogeneous(3, center);
    let c_inv = translation_to_homogeneous(3, &[-center[0], -center[1], -center[2]]);

    let sr = multiply(&multiply(&multiply(&c_inv, &t_inv), &xmat), &c);
    let sr_inv = invert_with_threshold(&sr, config.singular_value_ratio)?;

    // map each unit vector backwards, its length is the inverse of the scale on that axis
    let mut scale = [1.0; 3];
    let mut s_inv = Matrix::identity(4);
    for (i, s) in scale.iter_mut().enumerate() {
        let mut unit = [0.0, 0.0, 0.0, 1.0];
        unit[i] = 1.0;
        let v = apply(&sr_inv, &unit);
        let magnitude = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        if magnitude != 0.0 {
            *s = 1.0 / magnitude;
            s_inv[(i, i)] = magnitude;
        } else {
            log::debug!("no scale information along axis {i}, using 1.0");
        }
    }
    log::debug!("extracted scale {scale:?}");

    let r = multiply(&s_inv, &sr);
    let rotation = match rotation_to_angles_with_tolerance(&r, config.rotation_tolerance) {
        Ok(angles) => angles,
        Err(err) => {
            log::warn!("cannot convert the rotation block to angles: {err}\n{r}");
            return Err(err);
        }
    };

    Ok(AffineParameters {
        center: *center,
        translation,
        scale,
        shear: [0.0; 3],
        rotation,
    })
}
