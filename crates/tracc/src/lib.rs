#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use tracc_linalg as linalg;

#[doc(inline)]
pub use tracc_transforms as transforms;
