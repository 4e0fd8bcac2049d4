/// An error type for the linalg module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LinalgError {
    /// The data length does not match the requested shape.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// The matrix handed to the decomposition contains NaN or infinite values.
    #[error("Matrix contains non-finite values")]
    NonFiniteInput,

    /// The singular value decomposition produced a non-finite factor.
    #[error("Singular value decomposition did not converge")]
    SvdNotConverged,
}
