#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the linalg module.
pub mod error;

/// Dense matrix type.
pub mod matrix;

/// Matrix products, transposition, trace and inversion.
pub mod ops;

/// Point set utilities.
pub mod points;

/// Module to calculate the SVD of a general matrix
pub mod svd;

pub use error::LinalgError;
pub use matrix::Matrix;
