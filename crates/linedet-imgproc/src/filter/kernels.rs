use linedet_image::ImageError;
use num_traits::Float;

/// A dense 2D filter kernel with odd dimensions.
///
/// The weights are stored row-major. The anchor of the kernel is the center
/// cell `(rows / 2, cols / 2)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2d<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Kernel2d<T> {
    /// Create a new kernel from row-major weights.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of kernel rows. Must be odd.
    /// * `cols` - The number of kernel columns. Must be odd.
    /// * `data` - The kernel weights, `rows * cols` values.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelSize`] for zero or even dimensions and
    /// [`ImageError::InvalidChannelShape`] when the data length does not match.
    ///
    /// # Example
    ///
    /// ```
    /// use linedet_imgproc::filter::kernels::Kernel2d;
    ///
    /// let kernel = Kernel2d::new(1, 3, vec![1.0f64, 2.0, 3.0]).unwrap();
    /// assert_eq!(kernel.get(0, 2), 3.0);
    /// assert!(Kernel2d::new(2, 3, vec![0.0f64; 6]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ImageError> {
        if rows == 0 || cols == 0 || rows % 2 == 0 || cols % 2 == 0 {
            return Err(ImageError::InvalidKernelSize(rows, cols));
        }

        if data.len() != rows * cols {
            return Err(ImageError::InvalidChannelShape(data.len(), rows * cols));
        }

        Ok(Self { rows, cols, data })
    }

    /// The number of kernel rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of kernel columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The weight at `(row, col)`.
    ///
    /// PRECONDITION: `row < rows` and `col < cols`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// The kernel weights, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The sum of all the weights.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &w| acc + w)
    }

    /// Return the kernel flipped along both axes.
    pub fn flipped(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().rev().copied().collect(),
        }
    }
}

/// Create a normalized 2D gaussian kernel of size `kernel_size x kernel_size`.
///
/// Each cell holds `exp(-((row - center)² + (col - center)²) / (2σ²))` with
/// `center = kernel_size / 2`, and the weights are scaled to sum to one.
///
/// # Arguments
///
/// * `kernel_size` - The side of the kernel. Must be odd and positive.
/// * `sigma` - The standard deviation of the gaussian. Must be positive.
///
/// # Example
///
/// ```
/// use linedet_imgproc::filter::kernels::gaussian_kernel_2d;
///
/// let kernel = gaussian_kernel_2d::<f64>(5, 1.0).unwrap();
/// assert_eq!(kernel.rows(), 5);
/// assert!((kernel.sum() - 1.0).abs() < 1e-12);
/// ```
pub fn gaussian_kernel_2d<T: Float>(
    kernel_size: usize,
    sigma: f64,
) -> Result<Kernel2d<T>, ImageError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size, kernel_size));
    }

    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ImageError::InvalidKernelSigma(sigma));
    }

    let center = (kernel_size / 2) as f64;
    let denom = 2.0 * sigma * sigma;

    let mut weights = Vec::with_capacity(kernel_size * kernel_size);
    for row in 0..kernel_size {
        for col in 0..kernel_size {
            let dr = row as f64 - center;
            let dc = col as f64 - center;
            weights.push((-(dr * dr + dc * dc) / denom).exp());
        }
    }

    // normalize the kernel
    let norm = weights.iter().sum::<f64>();

    let data = weights
        .into_iter()
        .map(|w| {
            T::from(w / norm)
                .ok_or_else(|| ImageError::CastError(std::any::type_name::<T>().to_string()))
        })
        .collect::<Result<Vec<T>, ImageError>>()?;

    Kernel2d::new(kernel_size, kernel_size, data)
}

/// The 1x3 central difference kernel `[0.5, 0, -0.5]` for the x derivative.
pub fn derivative_kernel_x<T: Float>() -> Kernel2d<T> {
    let half = T::one() / (T::one() + T::one());
    Kernel2d {
        rows: 1,
        cols: 3,
        data: vec![half, T::zero(), -half],
    }
}

/// The 3x1 central difference kernel `[0.5, 0, -0.5]ᵗ` for the y derivative.
pub fn derivative_kernel_y<T: Float>() -> Kernel2d<T> {
    let half = T::one() / (T::one() + T::one());
    Kernel2d {
        rows: 3,
        cols: 1,
        data: vec![half, T::zero(), -half],
    }
}
