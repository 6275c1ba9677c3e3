use std::f64::consts::PI;

use linedet_image::ImageSize;

use super::HoughError;

/// Evenly spaced values in the half-open interval `[start, stop)`.
///
/// The number of values is `ceil((stop - start) / step)` and the i-th value is
/// `start + i * step`, so the last value may land within rounding distance of
/// `stop`.
///
/// # Errors
///
/// Returns [`HoughError::InvalidStep`] if `step` is not finite and positive.
///
/// # Example
///
/// ```
/// use linedet_imgproc::hough::arange;
///
/// assert_eq!(arange(-1.0, 1.0, 0.5).unwrap(), vec![-1.0, -0.5, 0.0, 0.5]);
/// assert!(arange(1.0, 0.0, 0.5).unwrap().is_empty());
/// ```
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, HoughError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(HoughError::InvalidStep(step));
    }

    let len = ((stop - start) / step).ceil();
    if !len.is_finite() || len <= 0.0 {
        return Ok(Vec::new());
    }

    Ok((0..len as usize).map(|i| start + i as f64 * step).collect())
}

/// The discretized `(θ, c)` parameter space of the Hough transform.
#[derive(Clone, Debug, PartialEq)]
pub struct HoughSpace {
    /// Candidate angles in radians.
    pub thetas: Vec<f64>,
    /// Candidate offsets in pixels.
    pub cs: Vec<f64>,
}

impl HoughSpace {
    /// Create a parameter space from explicit candidate sets.
    ///
    /// # Errors
    ///
    /// Returns an error if either set is empty.
    pub fn new(thetas: Vec<f64>, cs: Vec<f64>) -> Result<Self, HoughError> {
        if thetas.is_empty() {
            return Err(HoughError::EmptyThetas);
        }
        if cs.is_empty() {
            return Err(HoughError::EmptyOffsets);
        }
        Ok(Self { thetas, cs })
    }

    /// Create the parameter space covering every line through an image.
    ///
    /// The angles cover `[-π - theta_step, π + theta_step)` and the offsets
    /// `[-diagonal, diagonal)` where `diagonal = sqrt(height² + width²)`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::f64::consts::PI;
    /// use linedet_imgproc::hough::HoughSpace;
    ///
    /// let space = HoughSpace::from_image_size([50, 50].into(), PI / 40.0, 0.5).unwrap();
    /// assert_eq!(space.num_thetas(), 82);
    /// assert_eq!(space.num_cs(), 283);
    /// ```
    pub fn from_image_size(
        size: ImageSize,
        theta_step: f64,
        c_step: f64,
    ) -> Result<Self, HoughError> {
        let thetas = arange(-PI - theta_step, PI + theta_step, theta_step)?;

        let diagonal = size.diagonal();
        let cs = arange(-diagonal, diagonal, c_step)?;

        Self::new(thetas, cs)
    }

    /// The number of candidate angles.
    pub fn num_thetas(&self) -> usize {
        self.thetas.len()
    }

    /// The number of candidate offsets.
    pub fn num_cs(&self) -> usize {
        self.cs.len()
    }
}
