//! Raster output: compositing the planned layout and merging a cover photo

/// Pastes scaled images onto the canvas at their planned positions
pub mod compositor;
/// Cover-crop and side-by-side merge with an inspiration photo
pub mod cover;

pub use compositor::compose_collage;
pub use cover::merge_cover;
