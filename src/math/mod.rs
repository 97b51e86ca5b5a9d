//! Mathematical utilities for the analysis

/// Primality and perfect-square checks for grid lengths
pub mod integer;
/// Entropy, probability validation and rounding
pub mod probability;
