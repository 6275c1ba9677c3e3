use linedet_image::{Image, ImageError};
use num_traits::Float;
use rayon::prelude::*;

use super::kernels::Kernel2d;

/// Convolve an image with a 2D kernel producing an output of the same size.
///
/// The kernel is flipped along both axes and then correlated with the image,
/// anchored at `(kernel.rows() / 2, kernel.cols() / 2)`. Taps falling outside
/// the image are skipped, which is the same as zero padding. Every channel is
/// filtered independently with the same kernel.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `kernel` - The filter kernel with shape (l, k).
///
/// # Returns
///
/// A new image with shape (H, W, C).
///
/// # Example
///
/// ```
/// use linedet_image::{Image, ImageSize};
/// use linedet_imgproc::filter::{convolve, kernels::Kernel2d};
///
/// let image = Image::<f64, 1>::new(
///     ImageSize {
///         width: 5,
///         height: 1,
///     },
///     vec![0.0, 1.0, 2.0, 3.0, 4.0],
/// )
/// .unwrap();
///
/// let kernel = Kernel2d::new(1, 3, vec![0.5, 0.0, -0.5]).unwrap();
/// let dx = convolve(&image, &kernel).unwrap();
///
/// assert_eq!(dx.as_slice(), &[0.5, 1.0, 1.0, 1.0, -1.5]);
/// ```
pub fn convolve<T, const C: usize>(
    src: &Image<T, C>,
    kernel: &Kernel2d<T>,
) -> Result<Image<T, C>, ImageError>
where
    T: Float + Send + Sync,
{
    let mut dst = Image::<T, C>::from_size_val(src.size(), T::zero())?;

    let (rows, cols) = (src.rows(), src.cols());
    if rows == 0 || cols == 0 {
        return Ok(dst);
    }

    let flipped = kernel.flipped();
    let (l, k) = (flipped.rows(), flipped.cols());
    let (l_mid, k_mid) = (l / 2, k / 2);

    let src_data = src.as_slice();

    // each output row only reads from the source, so rows are independent
    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(row, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(col, dst_pixel)| {
                    for filt_row in 0..l {
                        let Some(a) = (row + filt_row).checked_sub(l_mid).filter(|&a| a < rows)
                        else {
                            continue;
                        };
                        for filt_col in 0..k {
                            let Some(b) =
                                (col + filt_col).checked_sub(k_mid).filter(|&b| b < cols)
                            else {
                                continue;
                            };
                            let w = flipped.get(filt_row, filt_col);
                            let offset = (a * cols + b) * C;
                            dst_pixel
                                .iter_mut()
                                .zip(&src_data[offset..offset + C])
                                .for_each(|(d, &s)| *d = *d + s * w);
                        }
                    }
                });
        });

    Ok(dst)
}
