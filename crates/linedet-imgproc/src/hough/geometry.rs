use super::HoughError;

/// Signed distance from `(x, y)` to the line `x·cos θ + y·sin θ + c = 0`.
#[inline]
pub fn line_distance(x: f64, y: f64, theta: f64, c: f64) -> f64 {
    x * theta.cos() + y * theta.sin() + c
}

/// Check which points lie closer than `thresh` to the line `(theta, c)`.
///
/// # Arguments
///
/// * `xs` - The x coordinates of the points.
/// * `ys` - The y coordinates of the points, parallel to `xs`.
/// * `theta` - The angle of the line normal in radians.
/// * `c` - The offset of the line.
/// * `thresh` - The distance threshold, compared strictly.
///
/// # Returns
///
/// A mask with `true` where `|x·cos θ + y·sin θ + c| < thresh`.
///
/// # Example
///
/// ```
/// use linedet_imgproc::hough::check_distance_from_line;
///
/// // the vertical line x = 2
/// let mask = check_distance_from_line(&[1.0, 2.0, 2.4, 2.5], &[0.0; 4], 0.0, -2.0, 0.5).unwrap();
/// assert_eq!(mask, vec![false, true, true, false]);
/// ```
pub fn check_distance_from_line(
    xs: &[f64],
    ys: &[f64],
    theta: f64,
    c: f64,
    thresh: f64,
) -> Result<Vec<bool>, HoughError> {
    if xs.len() != ys.len() {
        return Err(HoughError::CoordinateLengthMismatch(xs.len(), ys.len()));
    }

    let (sin, cos) = theta.sin_cos();

    Ok(xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (x * cos + y * sin + c).abs() < thresh)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn horizontal_line() -> Result<(), HoughError> {
        // y = 3
        let xs = [0.0, 10.0, 5.0, 5.0];
        let ys = [3.0, 3.2, 4.0, 2.6];
        let mask = check_distance_from_line(&xs, &ys, FRAC_PI_2, -3.0, 0.5)?;
        assert_eq!(mask, vec![true, true, false, true]);
        Ok(())
    }

    #[test]
    fn diagonal_line() -> Result<(), HoughError> {
        // x + y = 4 normalized
        let s = 0.5f64.sqrt();
        let xs = [2.0, 0.0, 4.0, 0.0];
        let ys = [2.0, 4.0, 4.0, 0.0];
        let mask = check_distance_from_line(&xs, &ys, FRAC_PI_4, -4.0 * s, 0.1)?;
        assert_eq!(mask, vec![true, true, false, false]);
        Ok(())
    }

    #[test]
    fn negating_points_and_offset_keeps_distance() -> Result<(), HoughError> {
        let xs = [0.0, 1.5, 7.0, -3.0, 12.25];
        let ys = [2.0, -4.0, 0.5, 9.0, 3.0];
        let (theta, c) = (0.7, -1.3);

        let neg_xs: Vec<f64> = xs.iter().map(|x| -x).collect();
        let neg_ys: Vec<f64> = ys.iter().map(|y| -y).collect();

        for thresh in [0.25, 1.0, 4.0] {
            assert_eq!(
                check_distance_from_line(&xs, &ys, theta, c, thresh)?,
                check_distance_from_line(&neg_xs, &neg_ys, theta, -c, thresh)?
            );
        }

        for (&x, &y) in xs.iter().zip(&ys) {
            let d = line_distance(x, y, theta, c);
            assert_eq!(line_distance(-x, -y, theta, -c), -d);
        }

        Ok(())
    }

    #[test]
    fn opposite_normal_is_the_same_line() {
        let (theta, c) = (0.3, 2.0);
        for (x, y) in [(1.0, 2.0), (-4.0, 0.5), (10.0, -7.0)] {
            let d = line_distance(x, y, theta, c);
            let d_opposite = line_distance(x, y, theta + PI, -c);
            assert!((d + d_opposite).abs() < 1e-12);
        }
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            check_distance_from_line(&[0.0, 1.0], &[0.0], 0.0, 0.0, 1.0).unwrap_err(),
            HoughError::CoordinateLengthMismatch(2, 1)
        );
    }
}
