use raster::{Algorithm, MAX_MARKER_SIZE};

use crate::Settings;

#[derive(clap::Parser, Debug)]
#[command(name = "linedraw", version, about="Draws random lines with classic rasterization algorithms", long_about = None)]
pub struct Arguments {
    /// Seed for the random number generator (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of stars drawn when resetting the canvas
    #[arg(long)]
    stars: Option<usize>,

    /// Half-width of the squares marking line endpoints (0 to 300)
    #[arg(long, value_parser = parse_marker_size)]
    marker_size: Option<i32>,

    /// Algorithm used for random lines
    /// (incremental-error, bresenham, midpoint or parametric)
    #[arg(long, value_parser = parse_algorithm)]
    algorithm: Option<Algorithm>,
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }

        if let Some(stars) = self.stars {
            settings.star_count = stars;
        }

        if let Some(marker_size) = self.marker_size {
            settings.marker_size = marker_size;
        }

        if let Some(algorithm) = self.algorithm {
            settings.algorithm = algorithm;
        }
    }
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: raster::UnknownAlgorithm| format!("{e}"))
}

fn parse_marker_size(s: &str) -> Result<i32, String> {
    let size: i32 = s
        .parse()
        .map_err(|e: <i32 as std::str::FromStr>::Err| format!("{e}"))?;

    if size < 0 {
        return Err(format!("marker size must not be negative, got {size}"));
    }
    if size > MAX_MARKER_SIZE {
        return Err(format!(
            "marker size must be at most {MAX_MARKER_SIZE}, got {size}"
        ));
    }
    Ok(size)
}
