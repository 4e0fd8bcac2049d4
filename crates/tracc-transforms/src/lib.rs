#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// 3D affine transforms built from center, translation, scale and rotation.
pub mod affine;

/// Recovery of affine parameters from a matrix.
pub mod decompose;

/// Error types for the transforms module.
pub mod error;

/// Homogeneous translation, rotation and composed transforms of any dimension.
pub mod homogeneous;

/// Euler angle rotations.
pub mod rotation;

pub use affine::{build_forward, build_inverse, AffineMatrix, AffineParameters};
pub use decompose::{extract_parameters, DecomposeConfig};
pub use error::TransformError;
