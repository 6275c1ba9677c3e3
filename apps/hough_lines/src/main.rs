use argh::FromArgs;
use std::path::PathBuf;

use linedet::{io::functional as F, HoughConfig};

#[derive(FromArgs)]
/// Detect straight lines in an image with a gradient guided Hough transform
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output image with the detected lines drawn
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// path to a JSON file with the pipeline parameters
    #[argh(option)]
    config: Option<PathBuf>,

    /// path to write the detected lines as JSON
    #[argh(option)]
    lines: Option<PathBuf>,

    /// gradient magnitude a pixel must exceed to vote
    #[argh(option)]
    magnitude_threshold: Option<f64>,

    /// minimum number of votes for a detected line
    #[argh(option)]
    vote_threshold: Option<f64>,

    /// side of the local maxima window
    #[argh(option)]
    neighborhood: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let mut config = match &args.config {
        Some(path) => HoughConfig::from_json_file(path)?,
        None => HoughConfig::default(),
    };

    if let Some(magnitude_threshold) = args.magnitude_threshold {
        config.magnitude_threshold = magnitude_threshold;
    }
    if let Some(vote_threshold) = args.vote_threshold {
        config.vote_threshold = vote_threshold;
    }
    if let Some(neighborhood) = args.neighborhood {
        config.neighborhood = neighborhood;
    }

    log::debug!("config: {:?}", config);

    let (image, lines) = linedet::do_hough_lines(&args.input, &config)?;

    for line in lines.iter() {
        log::info!("line theta: {:.4} c: {:.2}", line.theta, line.c);
    }

    F::write_image_rgb_f64(&args.output, &image)?;
    log::info!("wrote {}", args.output.display());

    if let Some(path) = args.lines {
        // one [theta, c] pair per line
        let pairs = lines.iter().map(|&l| l.into()).collect::<Vec<(f64, f64)>>();
        std::fs::write(&path, serde_json::to_string_pretty(&pairs)?)?;
        log::info!("wrote {} lines to {}", lines.len(), path.display());
    }

    Ok(())
}
