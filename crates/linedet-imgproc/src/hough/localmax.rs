use super::{HoughError, HoughLine, VoteHistogram};

/// Find the local maxima of a vote histogram.
///
/// A cell is kept when its count is at least `thresh` and no cell of the
/// `nbhd x nbhd` window around it holds more votes. The window starts
/// `nbhd / 2` cells before the cell in both directions and is clipped to the
/// histogram; out of range positions are ignored. Equal counts do not
/// suppress each other, so a plateau yields every one of its cells. An even
/// `nbhd` gives a window that extends one cell further before the center than
/// after it.
///
/// # Arguments
///
/// * `votes` - The histogram of shape `(thetas.len(), cs.len())`.
/// * `thetas` - The candidate angles, one per histogram row.
/// * `cs` - The candidate offsets, one per histogram column.
/// * `thresh` - The minimum number of votes.
/// * `nbhd` - The side of the suppression window. Must be positive.
///
/// # Returns
///
/// The accepted lines in row-major scan order of the histogram.
///
/// # Example
///
/// ```
/// use linedet_imgproc::hough::{localmax, VoteHistogram};
///
/// let votes = VoteHistogram::new(1, 4, vec![1.0, 5.0, 2.0, 5.0]).unwrap();
/// let lines = localmax(&votes, &[0.0], &[10.0, 20.0, 30.0, 40.0], 3.0, 3).unwrap();
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].c, 20.0);
/// assert_eq!(lines[1].c, 40.0);
/// ```
pub fn localmax(
    votes: &VoteHistogram,
    thetas: &[f64],
    cs: &[f64],
    thresh: f64,
    nbhd: usize,
) -> Result<Vec<HoughLine>, HoughError> {
    if thetas.is_empty() {
        return Err(HoughError::EmptyThetas);
    }

    if cs.is_empty() {
        return Err(HoughError::EmptyOffsets);
    }

    if nbhd == 0 {
        return Err(HoughError::InvalidNeighborhood(nbhd));
    }

    if votes.rows() != thetas.len() || votes.cols() != cs.len() {
        return Err(HoughError::HistogramShapeMismatch(
            votes.rows(),
            votes.cols(),
            thetas.len(),
            cs.len(),
        ));
    }

    let (m, n) = (votes.rows(), votes.cols());
    let half = nbhd / 2;
    let data = votes.as_slice();

    // clipped window [center - half, center - half + nbhd)
    let window = |center: usize, len: usize| {
        let start = center.saturating_sub(half);
        let end = (center + nbhd).saturating_sub(half).min(len);
        start..end
    };

    let mut lines = Vec::new();
    for row in 0..m {
        for col in 0..n {
            let value = data[row * n + col];
            if value < thresh {
                continue;
            }

            let is_max = window(row, m)
                .all(|a| data[a * n..(a + 1) * n][window(col, n)].iter().all(|&v| v <= value));

            if is_max {
                lines.push(HoughLine::new(thetas[row], cs[col]));
            }
        }
    }

    log::debug!("localmax: {} lines above {} votes", lines.len(), thresh);

    Ok(lines)
}
