//! Line detection with a gradient guided Hough transform.
//!
//! A line is parametrised as `x·cos θ + y·sin θ + c = 0`. Pixels with a strong
//! gradient vote for every `(θ, c)` they lie close to, provided their gradient
//! orientation agrees with `θ`. Peaks of the resulting histogram are the
//! detected lines.
//!
//! The orientation test compares `|orientation - θ|` without wrapping around
//! `±π`. An edge whose orientation sits right at `π` may therefore split its
//! votes between both ends of the θ range.

use linedet_image::ImageError;

mod geometry;
pub use geometry::{check_distance_from_line, line_distance};

mod localmax;
pub use localmax::localmax;

mod space;
pub use space::{arange, HoughSpace};

mod voting;
pub use voting::{hough_voting, VoteHistogram};

/// An error type for the hough module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HoughError {
    /// Error when the set of candidate angles is empty.
    #[error("The set of candidate angles is empty")]
    EmptyThetas,

    /// Error when the set of candidate offsets is empty.
    #[error("The set of candidate offsets is empty")]
    EmptyOffsets,

    /// Error when the local maxima neighborhood is not positive.
    #[error("Invalid neighborhood size {0}: must be positive")]
    InvalidNeighborhood(usize),

    /// Error when a discretization step is not finite and positive.
    #[error("Invalid discretization step {0}: must be finite and positive")]
    InvalidStep(f64),

    /// Error when two coordinate arrays have different lengths.
    #[error("Coordinate arrays have different lengths: {0} and {1}")]
    CoordinateLengthMismatch(usize, usize),

    /// Error when the vote histogram does not match the parameter sets.
    #[error("Vote histogram of shape {0}x{1} does not match {2} angles and {3} offsets")]
    HistogramShapeMismatch(usize, usize, usize, usize),

    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// A line `x·cos θ + y·sin θ + c = 0`.
///
/// `(θ, c)` and `(θ ± π, -c)` describe the same set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoughLine {
    /// Angle of the line normal in radians.
    pub theta: f64,
    /// Signed offset of the line.
    pub c: f64,
}

impl HoughLine {
    /// Create a new line from its angle and offset.
    pub fn new(theta: f64, c: f64) -> Self {
        Self { theta, c }
    }

    /// Signed distance from the point `(x, y)` to the line.
    #[inline]
    pub fn distance(&self, x: f64, y: f64) -> f64 {
        line_distance(x, y, self.theta, self.c)
    }
}

impl From<(f64, f64)> for HoughLine {
    fn from((theta, c): (f64, f64)) -> Self {
        Self { theta, c }
    }
}

impl From<HoughLine> for (f64, f64) {
    fn from(line: HoughLine) -> Self {
        (line.theta, line.c)
    }
}
