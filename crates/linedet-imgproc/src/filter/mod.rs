//! Filter operations
//!
//! This module provides the filter kernels and the 2D convolution used to
//! smooth images and estimate their derivatives.

/// Filter kernels
pub mod kernels;

/// 2D convolution
mod convolution;
pub use convolution::*;
