use linedet_image::{Image, ImageError};
use rayon::prelude::*;

use super::HoughError;

/// Accumulated votes indexed by `(θ-index, c-index)`.
#[derive(Clone, Debug, PartialEq)]
pub struct VoteHistogram {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl VoteHistogram {
    /// Create a histogram from row-major counts.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, HoughError> {
        if data.len() != rows * cols {
            return Err(ImageError::InvalidChannelShape(data.len(), rows * cols).into());
        }
        Ok(Self { rows, cols, data })
    }

    /// The number of angle rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of offset columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The number of votes for `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// The counts, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The largest count in the histogram.
    pub fn max_votes(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }
}

// an edge pixel that passed the magnitude threshold
struct Candidate {
    x: f64,
    y: f64,
    orientation: f64,
}

/// Accumulate Hough votes from a gradient field.
///
/// A pixel votes for `(θ, c)` when all of the following hold:
///
/// * its gradient magnitude is strictly greater than `thresh1`,
/// * its distance to the line `(θ, c)` is strictly less than `thresh2`,
/// * `|orientation - θ|` is strictly less than `thresh3`.
///
/// The angular difference is not wrapped around `±π`.
///
/// # Arguments
///
/// * `gradmag` - The gradient magnitude.
/// * `gradori` - The gradient orientation in radians.
/// * `thetas` - The candidate angles.
/// * `cs` - The candidate offsets.
/// * `thresh1` - The gradient magnitude threshold.
/// * `thresh2` - The distance threshold.
/// * `thresh3` - The orientation threshold in radians.
///
/// # Returns
///
/// A histogram of shape `(thetas.len(), cs.len())`.
pub fn hough_voting(
    gradmag: &Image<f64, 1>,
    gradori: &Image<f64, 1>,
    thetas: &[f64],
    cs: &[f64],
    thresh1: f64,
    thresh2: f64,
    thresh3: f64,
) -> Result<VoteHistogram, HoughError> {
    if gradmag.size() != gradori.size() {
        return Err(ImageError::InvalidImageSize(
            gradmag.cols(),
            gradmag.rows(),
            gradori.cols(),
            gradori.rows(),
        )
        .into());
    }

    if thetas.is_empty() {
        return Err(HoughError::EmptyThetas);
    }

    if cs.is_empty() {
        return Err(HoughError::EmptyOffsets);
    }

    let cols = gradmag.cols();

    // row-major scan of the pixels strong enough to vote
    let candidates = gradmag
        .as_slice()
        .iter()
        .zip(gradori.as_slice())
        .enumerate()
        .filter(|(_, (&mag, _))| mag > thresh1)
        .map(|(idx, (_, &orientation))| Candidate {
            x: (idx % cols) as f64,
            y: (idx / cols) as f64,
            orientation,
        })
        .collect::<Vec<_>>();

    log::debug!(
        "hough voting: {} candidate pixels, {}x{} bins",
        candidates.len(),
        thetas.len(),
        cs.len()
    );

    let mut votes = vec![0.0; thetas.len() * cs.len()];

    // one histogram row per angle; the orientation test does not depend on c
    votes
        .par_chunks_exact_mut(cs.len())
        .zip(thetas.par_iter())
        .for_each(|(votes_row, &theta)| {
            let (sin, cos) = theta.sin_cos();

            let projections = candidates
                .iter()
                .filter(|p| (p.orientation - theta).abs() < thresh3)
                .map(|p| p.x * cos + p.y * sin)
                .collect::<Vec<_>>();

            if projections.is_empty() {
                return;
            }

            for (v, &c) in votes_row.iter_mut().zip(cs) {
                *v = projections
                    .iter()
                    .filter(|&&proj| (proj + c).abs() < thresh2)
                    .count() as f64;
            }
        });

    VoteHistogram::new(thetas.len(), cs.len(), votes)
}
