//! Masonry collage composition for product cutouts
//!
//! Independently sized cutouts are balanced across a few columns, scaled so
//! the whole arrangement fits a fixed canvas, spread vertically within each
//! column and pasted onto the canvas. An optional inspiration photo can be
//! cover-cropped and placed beside the result.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Column planning, scaling, assignment and vertical distribution
pub mod layout;
/// Compositing and cover-photo merging
pub mod render;

pub use io::configuration::CollageConfig;
pub use io::error::{CollageError, Result};
pub use io::source::{OrderedImages, SourceImage};
pub use layout::LayoutPlan;
