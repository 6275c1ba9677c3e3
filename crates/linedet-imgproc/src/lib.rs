#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// utilities to draw on images.
pub mod draw;

/// image filtering module.
pub mod filter;

/// image gradient module.
pub mod gradient;

/// Hough transform line detection module.
pub mod hough;

/// module containing parallization utilities.
pub mod parallel;
