/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the number of channels does not match the image type.
    #[error("Invalid number of channels: expected {0}, got {1}")]
    InvalidChannelCount(usize, usize),

    /// Error when the image size is not valid.
    #[error("Invalid image size. Got: {0}x{1}, expected: {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index out of bounds. Got: ({0}, {1}), image size: {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds for an image with {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the image data cannot be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when a filter kernel has an even or zero dimension.
    #[error("Invalid kernel size {0}x{1}: both dimensions must be odd and positive")]
    InvalidKernelSize(usize, usize),

    /// Error when a gaussian kernel is requested with a non-positive sigma.
    #[error("Invalid kernel sigma {0}: must be finite and positive")]
    InvalidKernelSigma(f64),
}
