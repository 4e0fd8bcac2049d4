use crate::{error::LinalgError, matrix::Matrix, svd::svd};

/// Singular values below `max(w) * SINGULAR_VALUE_RATIO` are treated as zero by [`invert`].
pub const SINGULAR_VALUE_RATIO: f64 = 1e-6;

/// Multiply two matrices.
///
/// # Arguments
///
/// * `a` - The left matrix with shape (l, m).
/// * `b` - The right matrix with shape (m, n).
///
/// # Returns
///
/// The product `a * b` with shape (l, n).
///
/// PRECONDITION: the inner dimensions agree.
///
/// Example:
///
/// ```
/// use tracc_linalg::{ops::multiply, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
/// let b = Matrix::identity(2);
/// assert_eq!(multiply(&a, &b), a);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(
        a.cols(),
        b.rows(),
        "cannot multiply a {}x{} matrix by a {}x{} matrix",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols()
    );

    let mut c = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut sum = 0.0;
            for k in 0..a.cols() {
                sum += a[(i, k)] * b[(k, j)];
            }
            c[(i, j)] = sum;
        }
    }
    c
}

/// Replace `a` with `a * b`.
///
/// The product is formed in a temporary before `a` is overwritten.
pub fn multiply_assign_right(a: &mut Matrix, b: &Matrix) {
    *a = multiply(a, b);
}

/// Replace `b` with `a * b`.
///
/// The product is formed in a temporary before `b` is overwritten.
pub fn multiply_assign_left(a: &Matrix, b: &mut Matrix) {
    *b = multiply(a, b);
}

/// Transpose a matrix.
///
/// Example:
///
/// ```
/// use tracc_linalg::{ops::transpose, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0, 3.0]]);
/// let at = transpose(&a);
/// assert_eq!(at.shape(), (3, 1));
/// assert_eq!(at[(2, 0)], 3.0);
/// ```
pub fn transpose(a: &Matrix) -> Matrix {
    Matrix::from_shape_fn(a.cols(), a.rows(), |i, j| a[(j, i)])
}

/// Transpose `a` in place. A non-square matrix changes shape from (r, c) to (c, r).
pub fn transpose_in_place(a: &mut Matrix) {
    let tmp = transpose(a);
    *a = tmp;
}

/// Multiply every element of `a` by `scalar`.
pub fn scalar_multiply(a: &Matrix, scalar: f64) -> Matrix {
    a.map(|v| scalar * v)
}

/// Sum of the diagonal elements of a square matrix.
pub fn trace(a: &Matrix) -> f64 {
    assert!(
        a.is_square(),
        "trace requires a square matrix, got {}x{}",
        a.rows(),
        a.cols()
    );
    (0..a.rows()).map(|i| a[(i, i)]).sum()
}

/// Apply a matrix to a vector by premultiplication, `m * v`.
pub fn apply(m: &Matrix, v: &[f64]) -> Vec<f64> {
    assert_eq!(
        m.cols(),
        v.len(),
        "cannot apply a {}x{} matrix to a vector of length {}",
        m.rows(),
        m.cols(),
        v.len()
    );
    (0..m.rows())
        .map(|i| m.row(i).iter().zip(v).map(|(a, b)| a * b).sum::<f64>())
        .collect()
}

/// Invert a square matrix through its singular value decomposition.
///
/// With `a = U * diag(w) * V^T`, every singular value smaller than
/// `max(w) * SINGULAR_VALUE_RATIO` gets a zero reciprocal, the others `1 / w`, and the
/// result is `V * diag(1 / w) * U^T`. For well conditioned matrices this is the inverse;
/// for singular or nearly singular ones it is a finite pseudo-inverse.
///
/// # Errors
///
/// Returns an error if the decomposition cannot be computed, see [`svd`].
///
/// Example:
///
/// ```
/// use tracc_linalg::{ops::invert, Matrix};
///
/// let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 4.0]]);
/// let inv = invert(&a).unwrap();
/// assert!((inv[(0, 0)] - 0.5).abs() < 1e-12);
/// assert!((inv[(1, 1)] - 0.25).abs() < 1e-12);
/// ```
pub fn invert(a: &Matrix) -> Result<Matrix, LinalgError> {
    invert_with_threshold(a, SINGULAR_VALUE_RATIO)
}

/// Same as [`invert`] with a custom singular value cut-off ratio.
pub fn invert_with_threshold(a: &Matrix, ratio: f64) -> Result<Matrix, LinalgError> {
    assert!(
        a.is_square(),
        "invert requires a square matrix, got {}x{}",
        a.rows(),
        a.cols()
    );

    let decomposition = svd(a)?;

    let w_max = decomposition
        .singular_values
        .iter()
        .copied()
        .fold(0.0, f64::max);
    let w_min = w_max * ratio;

    // an all-zero matrix has w_max == 0, zero singular values must never be inverted
    let w_inv = decomposition
        .singular_values
        .iter()
        .map(|&w| {
            if w < w_min || w == 0.0 {
                log::debug!("singular value {w:e} below threshold {w_min:e}, zeroed");
                0.0
            } else {
                1.0 / w
            }
        })
        .collect::<Vec<_>>();

    let v_w = multiply(&decomposition.v, &Matrix::from_diagonal(&w_inv));
    Ok(multiply(&v_w, &transpose(&decomposition.u)))
}

/// Invert `a` in place, see [`invert`].
///
/// On error `a` is left untouched.
pub fn invert_in_place(a: &mut Matrix) -> Result<(), LinalgError> {
    let tmp = invert(a)?;
    *a = tmp;
    Ok(())
}
