/// Command-line parsing and run orchestration
pub mod cli;
/// Defaults, limits and validated collage configuration
pub mod configuration;
/// Error types for loading, configuration and export
pub mod error;
/// RGBA decoding and PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
/// Source images, their shared ordering and directory loading
pub mod source;
