#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use linedet_image as image;

#[doc(inline)]
pub use linedet_imgproc as imgproc;

#[doc(inline)]
pub use linedet_io as io;

/// End-to-end line detection pipeline.
pub mod pipeline;

pub use pipeline::{detect_lines, do_hough_lines, HoughConfig, HoughLinesError, HoughLinesResult};
