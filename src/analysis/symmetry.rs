//! Mirror symmetry of orientation grids along four axes
//!
//! Every line perpendicular to the mirror axis is folded onto itself: its
//! outer halves are compared cell by cell, the second half reflected through
//! the axis rule. The score is `1 - mismatches / (N / 2)`, so 1.0 means a
//! perfect mirror image and 0.0 means every comparable pair differs.

use crate::io::error::Result;
use crate::spatial::grid::{GridShape, anti_diagonals, columns, diagonals, rows};
use crate::spatial::tiles::{ReflectionAxis, invert_by_axis};

/// Count the mismatches between a line and its mirror image
///
/// The middle element of an odd-length line is ignored. With `axis` set, the
/// far half is reflected before comparing; `None` compares values directly,
/// which suits binary grids.
pub fn palindrome_difference(line: &[i32], axis: Option<ReflectionAxis>) -> usize {
    let half = line.len() / 2;
    let near = line.get(..half).unwrap_or_default();
    let far: Vec<i32> = line
        .get(line.len() - half..)
        .unwrap_or_default()
        .iter()
        .rev()
        .copied()
        .collect();
    let far = match axis {
        Some(axis) => invert_by_axis(&far, axis),
        None => far,
    };

    near.iter().zip(&far).filter(|(a, b)| a != b).count()
}

/// Whether a line is its own mirror image under `axis`
pub fn is_palindrome(line: &[i32], axis: Option<ReflectionAxis>) -> bool {
    palindrome_difference(line, axis) == 0
}

fn ratio(lines: &[Vec<i32>], axis: Option<ReflectionAxis>, len: usize) -> f64 {
    let mismatches: usize = lines
        .iter()
        .map(|line| palindrome_difference(line, axis))
        .sum();
    let max_error = len as f64 / 2.0;
    let score = 1.0 - mismatches as f64 / max_error;
    tracing::trace!(axis = axis.map_or(-1, ReflectionAxis::code), mismatches, score);
    score
}

const fn axis_for(axis: ReflectionAxis, binary: bool) -> Option<ReflectionAxis> {
    if binary { None } else { Some(axis) }
}

/// Symmetry across the horizontal axis (top half mirrors bottom half)
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid has no valid shape
pub fn horizontal_symmetry(values: &[i32], binary: bool, width: Option<usize>) -> Result<f64> {
    let shape = GridShape::resolve(values.len(), width)?;
    let view = shape.view(values)?;
    let axis = axis_for(ReflectionAxis::Horizontal, binary);
    Ok(ratio(&columns(&view), axis, values.len()))
}

/// Symmetry across the vertical axis (left half mirrors right half)
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid has no valid shape
pub fn vertical_symmetry(values: &[i32], binary: bool, width: Option<usize>) -> Result<f64> {
    let shape = GridShape::resolve(values.len(), width)?;
    let view = shape.view(values)?;
    let axis = axis_for(ReflectionAxis::Vertical, binary);
    Ok(ratio(&rows(&view), axis, values.len()))
}

/// Symmetry across the first diagonal
///
/// Folds every line parallel to the main diagonal.
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid is not square
pub fn first_diagonal_symmetry(values: &[i32], binary: bool, width: Option<usize>) -> Result<f64> {
    let side = GridShape::resolve_square(values.len(), width)?;
    let shape = GridShape {
        width: side,
        height: side,
    };
    let view = shape.view(values)?;
    let axis = axis_for(ReflectionAxis::FirstDiagonal, binary);
    Ok(ratio(&diagonals(&view), axis, values.len()))
}

/// Symmetry across the second diagonal
///
/// Folds every line parallel to the anti-diagonal.
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid is not square
pub fn second_diagonal_symmetry(
    values: &[i32],
    binary: bool,
    width: Option<usize>,
) -> Result<f64> {
    let side = GridShape::resolve_square(values.len(), width)?;
    let shape = GridShape {
        width: side,
        height: side,
    };
    let view = shape.view(values)?;
    let axis = axis_for(ReflectionAxis::SecondDiagonal, binary);
    Ok(ratio(&anti_diagonals(&view), axis, values.len()))
}

/// All four mirror symmetries: horizontal, vertical, first and second diagonal
///
/// Each entry fails independently, so a rectangular grid still reports its
/// horizontal and vertical scores.
pub fn symmetry_values(values: &[i32], binary: bool, width: Option<usize>) -> [Result<f64>; 4] {
    let scores = [
        horizontal_symmetry(values, binary, width),
        vertical_symmetry(values, binary, width),
        first_diagonal_symmetry(values, binary, width),
        second_diagonal_symmetry(values, binary, width),
    ];
    tracing::debug!(?scores, "symmetry values");
    scores
}
