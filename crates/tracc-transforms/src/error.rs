use tracc_linalg::LinalgError;

/// An error type for the transforms module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TransformError {
    /// The matrix is not a proper rotation within tolerance.
    #[error("Matrix is not a rotation: orthonormality deviation {deviation:e} exceeds tolerance {tolerance:e}")]
    NotARotation {
        /// Largest deviation from `R * R^T = I` and `det(R) = 1`
        deviation: f64,
        /// Tolerance the deviation was checked against
        tolerance: f64,
    },

    /// A linear algebra routine failed.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
