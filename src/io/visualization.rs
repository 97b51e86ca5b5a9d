//! Text renderings of orientation grids

use crate::io::error::Result;
use crate::spatial::grid::GridShape;

/// Arrow for each orientation; anything off the lattice renders as `?`
pub const fn arrow_glyph(value: i32) -> char {
    match value {
        0 => '^',
        90 => '>',
        180 => 'v',
        270 => '<',
        _ => '?',
    }
}

/// `X` for the 0 state, `O` for every other value
pub const fn binary_glyph(value: i32) -> char {
    if value == 0 { 'X' } else { 'O' }
}

/// One string of arrows per grid row
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid has no valid shape
pub fn render_arrows(values: &[i32], width: Option<usize>) -> Result<Vec<String>> {
    render_with(values, width, arrow_glyph)
}

/// One string of `X`/`O` per grid row
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid has no valid shape
pub fn render_binary(values: &[i32], width: Option<usize>) -> Result<Vec<String>> {
    render_with(values, width, binary_glyph)
}

fn render_with(
    values: &[i32],
    width: Option<usize>,
    glyph: impl Fn(i32) -> char,
) -> Result<Vec<String>> {
    let shape = GridShape::resolve(values.len(), width)?;
    Ok(values
        .chunks(shape.width)
        .map(|row| row.iter().map(|&value| glyph(value)).collect())
        .collect())
}
