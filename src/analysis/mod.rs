//! Symmetry, pattern and entropy measures over orientation grids

/// Tile-maker template matching and spiral classification
pub mod patterns;
/// Rotational symmetry between quadrants
pub mod rotational;
/// Orientation histograms and derived measures
pub mod statistics;
/// Every metric of one grid, rounded for reports
pub mod summary;
/// Mirror symmetry along the horizontal, vertical and diagonal axes
pub mod symmetry;

pub use summary::GridAnalysis;
