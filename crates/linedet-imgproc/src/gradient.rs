use linedet_image::{Image, ImageError};
use num_traits::Float;

use crate::{
    color::gray_from_rgb,
    filter::{convolve, kernels},
    parallel,
};

/// Default side of the smoothing kernel applied before differentiation.
pub const DEFAULT_GAUSSIAN_KERNEL_SIZE: usize = 5;

/// Default standard deviation of the smoothing kernel.
pub const DEFAULT_GAUSSIAN_SIGMA: f64 = 1.0;

/// The gradient of a grayscale image.
#[derive(Clone, Debug)]
pub struct GradientField<T> {
    /// Gradient magnitude `sqrt(dx² + dy²)`, non-negative.
    pub magnitude: Image<T, 1>,
    /// Gradient orientation `atan2(dy, dx)` in radians, in `(-π, π]`.
    pub orientation: Image<T, 1>,
}

/// Compute the gradient of an RGB image.
///
/// The image is converted to grayscale, smoothed with a 5x5 gaussian with
/// sigma 1 and differentiated with the central difference kernels.
///
/// # Example
///
/// ```
/// use linedet_image::{Image, ImageSize};
/// use linedet_imgproc::gradient::gradient;
///
/// let image = Image::<f64, 3>::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 6,
///     },
///     0.0,
/// )
/// .unwrap();
///
/// let grad = gradient(&image).unwrap();
/// assert_eq!(grad.magnitude.size(), image.size());
/// assert!(grad.magnitude.as_slice().iter().all(|&m| m == 0.0));
/// ```
pub fn gradient<T>(src: &Image<T, 3>) -> Result<GradientField<T>, ImageError>
where
    T: Float + Send + Sync,
{
    gradient_with_gaussian(src, DEFAULT_GAUSSIAN_KERNEL_SIZE, DEFAULT_GAUSSIAN_SIGMA)
}

/// Compute the gradient of an RGB image with a custom smoothing kernel.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `kernel_size` - The side of the gaussian smoothing kernel. Must be odd.
/// * `sigma` - The standard deviation of the gaussian smoothing kernel.
pub fn gradient_with_gaussian<T>(
    src: &Image<T, 3>,
    kernel_size: usize,
    sigma: f64,
) -> Result<GradientField<T>, ImageError>
where
    T: Float + Send + Sync,
{
    let gray = gray_from_rgb(src)?;

    let smoothing = kernels::gaussian_kernel_2d::<T>(kernel_size, sigma)?;
    let smoothed = convolve(&gray, &smoothing)?;

    let dx = convolve(&smoothed, &kernels::derivative_kernel_x())?;
    let dy = convolve(&smoothed, &kernels::derivative_kernel_y())?;

    let mut magnitude = Image::<T, 1>::from_size_val(gray.size(), T::zero())?;
    parallel::par_iter_rows_val_two(&dx, &dy, &mut magnitude, |&gx, &gy, m| {
        *m = (gx * gx + gy * gy).sqrt();
    });

    let mut orientation = Image::<T, 1>::from_size_val(gray.size(), T::zero())?;
    parallel::par_iter_rows_val_two(&dx, &dy, &mut orientation, |&gx, &gy, o| {
        *o = gy.atan2(gx);
    });

    Ok(GradientField {
        magnitude,
        orientation,
    })
}
