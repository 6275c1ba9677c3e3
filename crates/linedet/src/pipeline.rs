use std::{f64::consts::PI, path::Path, time::Instant};

use serde::{Deserialize, Serialize};

use linedet_image::{Image, ImageError};
use linedet_imgproc::{
    draw::draw_lines,
    gradient::{gradient_with_gaussian, DEFAULT_GAUSSIAN_KERNEL_SIZE, DEFAULT_GAUSSIAN_SIGMA},
    hough::{hough_voting, localmax, HoughError, HoughLine, HoughSpace, VoteHistogram},
};
use linedet_io::{functional::read_image_rgb_f64, IoError};

/// An error type for the line detection pipeline.
#[derive(thiserror::Error, Debug)]
pub enum HoughLinesError {
    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the hough module.
    #[error(transparent)]
    Hough(#[from] HoughError),

    /// Error reading or writing files.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error parsing the configuration.
    #[error("Failed to parse the configuration. {0}")]
    ConfigError(#[from] serde_json::Error),
}

/// Parameters of the line detection pipeline.
///
/// Every field has a default, so a configuration file only needs to name the
/// fields it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughConfig {
    /// Side of the gaussian kernel smoothing the grayscale image.
    pub gaussian_kernel_size: usize,
    /// Standard deviation of the smoothing kernel.
    pub gaussian_sigma: f64,
    /// Spacing of the candidate angles in radians.
    pub theta_step: f64,
    /// Spacing of the candidate offsets in pixels.
    pub c_step: f64,
    /// Gradient magnitude a pixel must exceed to vote.
    pub magnitude_threshold: f64,
    /// Distance below which a pixel lies on a candidate line.
    pub distance_threshold: f64,
    /// Orientation difference below which a pixel agrees with a candidate angle.
    pub orientation_threshold: f64,
    /// Minimum number of votes for a detected line.
    pub vote_threshold: f64,
    /// Side of the local maxima window.
    pub neighborhood: usize,
    /// Distance below which a pixel is painted when drawing a line.
    pub draw_threshold: f64,
}

impl Default for HoughConfig {
    fn default() -> Self {
        Self {
            gaussian_kernel_size: DEFAULT_GAUSSIAN_KERNEL_SIZE,
            gaussian_sigma: DEFAULT_GAUSSIAN_SIGMA,
            theta_step: PI / 40.0,
            c_step: 0.5,
            magnitude_threshold: 0.1,
            distance_threshold: 0.5,
            orientation_threshold: PI / 40.0,
            vote_threshold: 20.0,
            neighborhood: 11,
            draw_threshold: 0.5,
        }
    }
}

impl HoughConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default value.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, HoughLinesError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileDoesNotExist(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path).map_err(IoError::from)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// The output of the line detection pipeline.
#[derive(Clone, Debug)]
pub struct HoughLinesResult {
    /// The input image with the detected lines drawn in red.
    pub image: Image<f64, 3>,
    /// The detected lines in row-major order of the vote histogram.
    pub lines: Vec<HoughLine>,
    /// The accumulated votes.
    pub votes: VoteHistogram,
}

/// Detect the straight lines of an RGB image.
///
/// The image is reduced to its gradient field, every strong pixel votes for
/// the lines it agrees with, and the local maxima of the votes are kept and
/// drawn on a copy of the input.
///
/// # Arguments
///
/// * `image` - The RGB image with samples in `[0, 1]`.
/// * `config` - The pipeline parameters.
///
/// # Example
///
/// ```
/// use linedet::{detect_lines, HoughConfig};
/// use linedet::image::{Image, ImageSize};
///
/// let image = Image::<f64, 3>::from_size_val(
///     ImageSize {
///         width: 20,
///         height: 20,
///     },
///     0.0,
/// )
/// .unwrap();
///
/// let result = detect_lines(&image, &HoughConfig::default()).unwrap();
/// assert!(result.lines.is_empty());
/// assert_eq!(result.image, image);
/// ```
pub fn detect_lines(
    image: &Image<f64, 3>,
    config: &HoughConfig,
) -> Result<HoughLinesResult, HoughLinesError> {
    let start = Instant::now();

    let grad =
        gradient_with_gaussian(image, config.gaussian_kernel_size, config.gaussian_sigma)?;
    log::debug!("gradient computed in {:?}", start.elapsed());

    let space = HoughSpace::from_image_size(image.size(), config.theta_step, config.c_step)?;

    let votes = hough_voting(
        &grad.magnitude,
        &grad.orientation,
        &space.thetas,
        &space.cs,
        config.magnitude_threshold,
        config.distance_threshold,
        config.orientation_threshold,
    )?;
    log::debug!(
        "voting done in {:?}, max votes {}",
        start.elapsed(),
        votes.max_votes()
    );

    let lines = localmax(
        &votes,
        &space.thetas,
        &space.cs,
        config.vote_threshold,
        config.neighborhood,
    )?;
    log::info!("detected {} lines in {:?}", lines.len(), start.elapsed());

    let image = draw_lines(image, &lines, config.draw_threshold);

    Ok(HoughLinesResult {
        image,
        lines,
        votes,
    })
}

/// Read an image from disk and detect its lines.
///
/// # Returns
///
/// The image with the detected lines drawn and the list of lines.
pub fn do_hough_lines(
    path: impl AsRef<Path>,
    config: &HoughConfig,
) -> Result<(Image<f64, 3>, Vec<HoughLine>), HoughLinesError> {
    let image = read_image_rgb_f64(path)?;
    let result = detect_lines(&image, config)?;
    Ok((result.image, result.lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use linedet_image::ImageSize;
    use linedet_io::functional::write_image_rgb_f64;

    fn vertical_line_image(size: ImageSize, x: f64) -> Result<Image<f64, 3>, ImageError> {
        let black = Image::<f64, 3>::from_size_val(size, 0.0)?;
        Ok(draw_lines(&black, &[HoughLine::new(0.0, -x)], 0.5))
    }

    // thin lines on black need a lower magnitude threshold than the default
    fn thin_line_config() -> HoughConfig {
        HoughConfig {
            magnitude_threshold: 0.03,
            ..Default::default()
        }
    }

    // both sides of a one pixel line are edges, about a pixel away from it
    fn near_vertical_line(line: &HoughLine, x: f64) -> bool {
        let turns = (line.theta / PI).round();
        let theta = line.theta - turns * PI;
        let c = if turns.rem_euclid(2.0) == 1.0 {
            -line.c
        } else {
            line.c
        };
        theta.abs() < PI / 40.0 && (c + x).abs() < 1.5
    }

    #[test]
    fn default_config() {
        let config = HoughConfig::default();
        assert_eq!(config.gaussian_kernel_size, 5);
        assert_eq!(config.neighborhood, 11);
        assert_relative_eq!(config.theta_step, 0.07853981633974483);
        assert_relative_eq!(config.orientation_threshold, config.theta_step);
        assert_relative_eq!(config.vote_threshold, 20.0);
    }

    #[test]
    fn config_from_partial_json() -> Result<(), HoughLinesError> {
        let tmp_dir = tempfile::tempdir().map_err(IoError::from)?;
        let file_path = tmp_dir.path().join("config.json");
        std::fs::write(&file_path, r#"{ "vote_threshold": 30.0, "neighborhood": 5 }"#)
            .map_err(IoError::from)?;

        let config = HoughConfig::from_json_file(&file_path)?;
        assert_eq!(config.vote_threshold, 30.0);
        assert_eq!(config.neighborhood, 5);
        assert_eq!(config.c_step, HoughConfig::default().c_step);

        Ok(())
    }

    #[test]
    fn config_errors() -> Result<(), HoughLinesError> {
        let err = HoughConfig::from_json_file("does/not/exist.json").unwrap_err();
        assert!(matches!(
            err,
            HoughLinesError::Io(IoError::FileDoesNotExist(_))
        ));

        let tmp_dir = tempfile::tempdir().map_err(IoError::from)?;
        let file_path = tmp_dir.path().join("config.json");
        std::fs::write(&file_path, r#"{ "neighborhood": "eleven" }"#).map_err(IoError::from)?;

        let err = HoughConfig::from_json_file(&file_path).unwrap_err();
        assert!(matches!(err, HoughLinesError::ConfigError(_)));

        Ok(())
    }

    #[test]
    fn detect_vertical_line() -> Result<(), HoughLinesError> {
        let _ = env_logger::builder().is_test(true).try_init();

        let image = vertical_line_image([50, 50].into(), 25.0)?;
        let result = detect_lines(&image, &thin_line_config())?;

        assert_eq!(result.votes.rows(), 82);
        assert_eq!(result.votes.cols(), 283);

        assert!(!result.lines.is_empty());
        assert!(result.lines.iter().all(|l| near_vertical_line(l, 25.0)));

        // the overlay keeps the drawn line red
        assert_eq!(result.image.get_pixel(25, 0, 0)?, 1.0);
        assert_eq!(result.image.get_pixel(25, 0, 1)?, 0.0);

        Ok(())
    }

    #[test]
    fn detect_rejects_bad_config() -> Result<(), HoughLinesError> {
        let image = vertical_line_image([10, 10].into(), 5.0)?;

        let config = HoughConfig {
            neighborhood: 0,
            ..Default::default()
        };
        assert!(matches!(
            detect_lines(&image, &config).unwrap_err(),
            HoughLinesError::Hough(HoughError::InvalidNeighborhood(0))
        ));

        let config = HoughConfig {
            gaussian_kernel_size: 4,
            ..Default::default()
        };
        assert!(matches!(
            detect_lines(&image, &config).unwrap_err(),
            HoughLinesError::Image(ImageError::InvalidKernelSize(4, 4))
        ));

        Ok(())
    }

    #[test]
    fn hough_lines_from_file() -> Result<(), HoughLinesError> {
        let tmp_dir = tempfile::tempdir().map_err(IoError::from)?;
        let file_path = tmp_dir.path().join("line.png");

        let image = vertical_line_image([40, 30].into(), 12.0)?;
        write_image_rgb_f64(&file_path, &image)?;

        let (overlay, lines) = do_hough_lines(&file_path, &thin_line_config())?;
        assert_eq!(overlay.size(), image.size());
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| near_vertical_line(l, 12.0)));

        Ok(())
    }

    #[test]
    fn hough_line_json() -> Result<(), HoughLinesError> {
        let lines = vec![HoughLine::new(0.0, -25.0), HoughLine::new(PI, 25.5)];
        let json = serde_json::to_string(&lines)?;
        assert_eq!(serde_json::from_str::<Vec<HoughLine>>(&json)?, lines);
        Ok(())
    }
}
