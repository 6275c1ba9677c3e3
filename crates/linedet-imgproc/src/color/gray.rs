use crate::parallel;
use linedet_image::{Image, ImageError};

/// Define the RGB weights for the luminance conversion.
const RW: f64 = 0.2125;
const GW: f64 = 0.7154;
const BW: f64 = 0.0721;

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.2125 * R + 0.7154 * G + 0.0721 * B
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// A single channel image with the same size as the input.
///
/// Only three channel images are accepted; the channel count is part of the
/// input type. Buffers with a runtime channel count should go through
/// [`Image::from_shape_vec`] first, which rejects anything but 3 channels.
///
/// # Example
///
/// ```
/// use linedet_image::{Image, ImageSize};
/// use linedet_imgproc::color::gray_from_rgb;
///
/// let image = Image::<f64, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f64; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let gray = gray_from_rgb(&image).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_rgb<T>(src: &Image<T, 3>) -> Result<Image<T, 1>, ImageError>
where
    T: Send + Sync + num_traits::Float,
{
    let cast_error = || ImageError::CastError(std::any::type_name::<T>().to_string());
    let rw = T::from(RW).ok_or_else(cast_error)?;
    let gw = T::from(GW).ok_or_else(cast_error)?;
    let bw = T::from(BW).ok_or_else(cast_error)?;

    let mut dst = Image::<T, 1>::from_size_val(src.size(), T::zero())?;

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0];
        let g = src_pixel[1];
        let b = src_pixel[2];
        dst_pixel[0] = rw * r + gw * g + bw * b;
    });

    Ok(dst)
}
