//! Symmetry and entropy analysis of FlexTiles orientation grids
//!
//! A grid is a flat, row-major sequence of tile orientations in degrees
//! (0, 90, 180 or 270). The crate scores how symmetric such a grid is under
//! reflection and rotation, how closely it repeats the tile-maker pinwheel,
//! and how evenly its orientations are distributed, and turns saved
//! FlexTiles sessions into reports.

#![deny(unsafe_code)]

/// Symmetry, pattern and entropy measures
pub mod analysis;
/// Session files, reports, logging and the command-line interface
pub mod io;
/// Integer and probability helpers
pub mod math;
/// Grid shapes, tile transforms and block decomposition
pub mod spatial;

pub use analysis::GridAnalysis;
pub use io::error::{AnalysisError, Result};
