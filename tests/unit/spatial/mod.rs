//! Tests for grid shapes, tile transforms and quadrant decomposition

pub mod grid;
