//! Command-line interface for building one collage from a directory of cutouts

use crate::io::configuration::{
    CollageConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_INPUT_DIR,
    DEFAULT_MERGE_GAP, DEFAULT_OUTER_PADDING, DEFAULT_OUTPUT_FILE, DEFAULT_VERTICAL_GAP,
    parse_hex_color,
};
use crate::io::error::Result;
use crate::io::image::{open_rgba, save_png};
use crate::io::progress::ProgressManager;
use crate::io::source::load_directory;
use crate::render::compositor::compose_collage;
use crate::render::cover::merge_cover;
use clap::Parser;
use image::{Rgba, RgbaImage};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "masonrycollage")]
#[command(
    author,
    version,
    about = "Arrange product cutouts into a masonry collage"
)]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Directory of product images to arrange
    #[arg(value_name = "INPUT_DIR", env = "INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// PNG file to write the collage to
    #[arg(value_name = "OUTPUT_FILE", env = "OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Inspiration photo placed to the left of the collage
    #[arg(short, long, value_name = "PHOTO")]
    pub inspiration: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Padding around and between columns
    #[arg(short, long, default_value_t = DEFAULT_OUTER_PADDING)]
    pub padding: u32,

    /// Vertical gap used while balancing columns
    #[arg(short, long, default_value_t = DEFAULT_VERTICAL_GAP)]
    pub gap: u32,

    /// Gap between the inspiration photo and the collage
    #[arg(short, long, default_value_t = DEFAULT_MERGE_GAP)]
    pub merge_gap: u32,

    /// Background color as #RRGGBB or #RRGGBBAA
    #[arg(short, long, value_parser = parse_hex_color, default_value = "#FFFFFF")]
    pub background: Rgba<u8>,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Collage configuration described by the arguments
    pub const fn config(&self) -> CollageConfig {
        CollageConfig {
            canvas_width: self.width,
            canvas_height: self.height,
            background: self.background,
            outer_padding: self.padding,
            vertical_gap: self.gap,
            merge_gap: self.merge_gap,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level when `RUST_LOG` is unset
    pub const fn log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Install the logger, honoring `RUST_LOG` over the CLI default
pub fn init_logging(cli: &Cli) {
    let env = env_logger::Env::default().default_filter_or(cli.log_level());
    // A logger may already be installed when embedded or under test
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Orchestrates loading, layout, optional cover merge and export
pub struct CollageProcessor {
    cli: Cli,
    progress: ProgressManager,
}

impl CollageProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = ProgressManager::with_visibility(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Build the collage and save it
    ///
    /// Returns the written path, or `None` when the input held no images.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The input directory cannot be listed
    /// - The collage cannot be written
    pub fn process(&mut self) -> Result<Option<PathBuf>> {
        let config = self.cli.config();
        config.validate()?;

        info!("Loading images from {}", self.cli.input_dir.display());
        let images = load_directory(&self.cli.input_dir, &self.progress)?;
        if images.is_empty() {
            info!("No images found in {}", self.cli.input_dir.display());
            self.progress.finish();
            return Ok(None);
        }
        info!("Loaded {} images", images.len());

        let Some(collage) = compose_collage(&images, &config, &self.progress) else {
            self.progress.finish();
            return Ok(None);
        };
        self.progress.finish();

        let output = match &self.cli.inspiration {
            Some(photo_path) => Self::merge_inspiration(photo_path, collage, &config),
            None => collage,
        };

        save_png(&output, &self.cli.output_file)?;
        info!("Collage saved to {}", self.cli.output_file.display());
        info!("Size: {}x{}", output.width(), output.height());

        Ok(Some(self.cli.output_file.clone()))
    }

    fn merge_inspiration(
        photo_path: &Path,
        collage: RgbaImage,
        config: &CollageConfig,
    ) -> RgbaImage {
        let photo = match open_rgba(photo_path) {
            Ok(photo) => photo,
            Err(error) => {
                warn!("Skipping inspiration photo: {error}");
                return collage;
            }
        };

        match merge_cover(&photo, &collage, config.merge_gap, config.background) {
            Some(merged) => {
                info!(
                    "Merged inspiration photo {} beside the collage",
                    photo_path.display()
                );
                merged
            }
            None => {
                warn!(
                    "Skipping inspiration photo {}: image has no area",
                    photo_path.display()
                );
                collage
            }
        }
    }
}
