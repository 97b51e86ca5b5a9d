//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Grid shape inference and line extraction
//! - Orientation values, reflections and rotations
//! - Quadrant decomposition

/// Grid shape inference and row/column/diagonal extraction
pub mod grid;
/// Quadrant and middle-strip decomposition
pub mod quadrants;
/// Orientation values, reflections and rotations
pub mod tiles;

pub use grid::GridShape;
