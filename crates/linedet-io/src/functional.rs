use std::path::Path;

use linedet_image::{ops::cast_and_scale, Image, ImageError, ImageSize};

use crate::error::IoError;

/// Reads an RGB image from the given file path with samples in `[0, 1]`.
///
/// The method tries to read from any image format supported by the image crate.
/// Grayscale inputs are expanded to three channels and alpha channels are
/// dropped.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB image with every 8-bit sample divided by 255.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] if the path does not exist and
/// [`IoError::ImageDecodeError`] if the content cannot be decoded.
pub fn read_image_rgb_f64(file_path: impl AsRef<Path>) -> Result<Image<f64, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(&file_path)?;

    let img = image::ImageReader::new(std::io::Cursor::new(&bytes))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("decoded {} as {:?} {}", file_path.display(), img.color(), size);

    let image_u8 = Image::<u8, 3>::new(size, img.into_rgb8().into_raw())?;

    let mut image = Image::<f64, 3>::from_size_val(size, 0.0)?;
    cast_and_scale(&image_u8, &mut image, 1.0 / 255.0)?;

    Ok(image)
}

/// Writes an RGB image with samples in `[0, 1]` to the given file path.
///
/// Samples are clamped to `[0, 1]`, scaled by 255 and rounded to 8 bits. The
/// encoding is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path of the file to write.
/// * `image` - The image to write.
pub fn write_image_rgb_f64(
    file_path: impl AsRef<Path>,
    image: &Image<f64, 3>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let data = image
        .as_slice()
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect::<Vec<_>>();

    let buffer = image::RgbImage::from_raw(image.width() as u32, image.height() as u32, data)
        .ok_or(ImageError::InvalidChannelShape(
            image.as_slice().len(),
            image.width() * image.height() * 3,
        ))?;

    buffer.save(file_path).map_err(IoError::ImageEncodeError)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file() {
        let err = read_image_rgb_f64("does/not/exist.png").unwrap_err();
        assert!(matches!(err, IoError::FileDoesNotExist(_)));
    }

    #[test]
    fn read_write_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("lines.png");

        #[rustfmt::skip]
        let image = Image::<f64, 3>::new(
            [2, 2].into(),
            vec![
                1.0, 0.0, 0.0,   0.5, 0.5, 0.5,
                -1.0, 2.0, 0.2,  0.0, 0.0, 1.0,
            ],
        )?;

        write_image_rgb_f64(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_rgb_f64(&file_path)?;
        assert_eq!(image_back.size(), image.size());

        let expected = [255u8, 0, 0, 128, 128, 128, 0, 255, 51, 0, 0, 255]
            .iter()
            .map(|&v| v as f64 * (1.0 / 255.0))
            .collect::<Vec<_>>();
        assert_eq!(image_back.as_slice(), expected.as_slice());

        Ok(())
    }

    #[test]
    fn read_grayscale_as_rgb() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        image::GrayImage::from_raw(3, 1, vec![0, 51, 255])
            .ok_or(ImageError::InvalidChannelShape(3, 3))?
            .save(&file_path)?;

        let image = read_image_rgb_f64(&file_path)?;
        assert_eq!(image.size(), ImageSize::from([3, 1]));

        let scale = 1.0 / 255.0;
        assert_eq!(image.get_pixel(0, 0, 0)?, 0.0);
        assert_eq!(image.get_pixel(1, 0, 0)?, 51.0 * scale);
        assert_eq!(image.get_pixel(1, 0, 1)?, 51.0 * scale);
        assert_eq!(image.get_pixel(2, 0, 2)?, 255.0 * scale);

        Ok(())
    }

    #[test]
    fn write_unknown_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("lines.unknown");

        let image = Image::<f64, 3>::from_size_val([2, 2].into(), 0.0)?;
        let err = write_image_rgb_f64(&file_path, &image).unwrap_err();
        assert!(matches!(err, IoError::ImageEncodeError(_)));

        Ok(())
    }
}
