//! Session files, reports and the command-line front end

/// Command-line arguments and batch processing
pub mod cli;
/// Compile-time constants
pub mod configuration;
/// Error and warning types
pub mod error;
/// `tracing` subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Report rendering and output paths
pub mod report;
/// Session file parsing
pub mod session;
/// String helpers
pub mod text;
/// Glyph renderings of grids
pub mod visualization;
