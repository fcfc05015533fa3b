//! Masonry layout engine
//!
//! This module contains the geometric core of the collage:
//! - Column count and width planning
//! - Two-pass image scaling
//! - Greedy shortest-column assignment
//! - Per-column vertical redistribution

/// Column count and width selection
pub mod columns;
/// Space-between and space-around distribution within columns
pub mod distribution;
/// Greedy shortest-column assignment with explicit column accumulators
pub mod masonry;
/// Ordered two-pass layout pipeline
pub mod plan;
/// Fit-to-column and global vertical scaling
pub mod sizing;

pub use plan::LayoutPlan;
pub use sizing::{ImageDimensions, ScaledSize};
