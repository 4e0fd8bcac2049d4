//! Singular Value Decomposition (SVD) of general dense matrices.
//!
//! For any matrix A ∈ ℝᵐˣⁿ the SVD decomposes it into three matrices:
//!
//! ```text
//! A = U Σ Vᵀ
//! ```
//!
//! where:
//! * U ∈ ℝᵐˣᵐ is an orthogonal matrix (left singular vectors)
//! * Σ holds the `min(m, n)` non-negative singular values on its diagonal
//! * V ∈ ℝⁿˣⁿ is an orthogonal matrix (right singular vectors)
//!
//! The decomposition itself is delegated to [`faer`]; this module only moves data in and
//! out of [`Matrix`] and checks that the result is usable.
//!
//! # Example
//!
//! ```
//! use tracc_linalg::{svd::svd, Matrix};
//!
//! let a = Matrix::from_rows(&[[3.0, 0.0], [0.0, 2.0]]);
//! let svd = svd(&a).unwrap();
//! assert_eq!(svd.singular_values.len(), 2);
//! ```

use crate::{error::LinalgError, matrix::Matrix};

/// The three factors of a singular value decomposition.
#[derive(Debug, Clone)]
pub struct SvdDecomposition {
    /// The matrix of left singular vectors.
    pub u: Matrix,

    /// The singular values, in the order matching the columns of `u` and `v`.
    pub singular_values: Vec<f64>,

    /// The matrix of right singular vectors.
    pub v: Matrix,
}

/// Compute the full singular value decomposition `a = u * diag(w) * v^T`.
///
/// # Errors
///
/// * [`LinalgError::NonFiniteInput`] if `a` contains NaN or infinite values.
/// * [`LinalgError::SvdNotConverged`] if any of the factors is not finite.
pub fn svd(a: &Matrix) -> Result<SvdDecomposition, LinalgError> {
    if !a.is_finite() {
        return Err(LinalgError::NonFiniteInput);
    }

    let (rows, cols) = a.shape();
    let mat = faer::Mat::<f64>::from_fn(rows, cols, |i, j| a[(i, j)]);
    let decomposition = mat.svd();

    let u_ref = decomposition.u();
    let v_ref = decomposition.v();
    let s_ref = decomposition.s_diagonal();

    let u = Matrix::from_shape_fn(rows, rows, |i, j| u_ref.read(i, j));
    let v = Matrix::from_shape_fn(cols, cols, |i, j| v_ref.read(i, j));
    let singular_values = (0..rows.min(cols)).map(|i| s_ref.read(i)).collect::<Vec<_>>();

    if !u.is_finite() || !v.is_finite() || singular_values.iter().any(|w| !w.is_finite()) {
        log::debug!("svd of a {rows}x{cols} matrix produced non-finite factors");
        return Err(LinalgError::SvdNotConverged);
    }

    Ok(SvdDecomposition {
        u,
        singular_values,
        v,
    })
}
