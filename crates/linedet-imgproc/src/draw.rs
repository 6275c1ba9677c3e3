use linedet_image::Image;
use num_traits::Float;
use rayon::prelude::*;

use crate::hough::HoughLine;

/// Draws a set of lines in red on a copy of an RGB image.
///
/// Every pixel `(x, y)` with `|x·cos θ + y·sin θ + c| < thresh` for some line
/// is set to `(1, 0, 0)`.
///
/// # Arguments
///
/// * `src` - The image to draw on.
/// * `lines` - The lines to draw.
/// * `thresh` - The distance below which a pixel belongs to a line.
///
/// # Returns
///
/// A new image with the lines drawn.
///
/// # Example
///
/// ```
/// use linedet_image::{Image, ImageSize};
/// use linedet_imgproc::{draw::draw_lines, hough::HoughLine};
///
/// let image = Image::<f64, 3>::from_size_val(
///     ImageSize {
///         width: 5,
///         height: 5,
///     },
///     0.0,
/// )
/// .unwrap();
///
/// // the vertical line x = 2
/// let drawn = draw_lines(&image, &[HoughLine::new(0.0, -2.0)], 0.5);
///
/// assert_eq!(drawn.get([3, 2, 0]), Some(&1.0));
/// assert_eq!(drawn.get([3, 1, 0]), Some(&0.0));
/// ```
pub fn draw_lines<T>(src: &Image<T, 3>, lines: &[HoughLine], thresh: f64) -> Image<T, 3>
where
    T: Float + Send + Sync,
{
    let mut dst = src.clone();

    let cols = dst.cols();
    if cols == 0 || lines.is_empty() {
        return dst;
    }

    let red = [T::one(), T::zero(), T::zero()];
    let trig = lines
        .iter()
        .map(|line| {
            let (sin, cos) = line.theta.sin_cos();
            (cos, sin, line.c)
        })
        .collect::<Vec<_>>();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * 3)
        .enumerate()
        .for_each(|(y, row)| {
            row.chunks_exact_mut(3).enumerate().for_each(|(x, pixel)| {
                let (x, y) = (x as f64, y as f64);
                if trig
                    .iter()
                    .any(|&(cos, sin, c)| (x * cos + y * sin + c).abs() < thresh)
                {
                    pixel.copy_from_slice(&red);
                }
            });
        });

    dst
}
