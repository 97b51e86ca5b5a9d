//! Local pattern matching against reference tile arrangements

use crate::analysis::statistics::orientation_bucket;
use crate::io::configuration::ORIENTATION_STATES;
use crate::io::error::Result;
use crate::spatial::grid::GridShape;

/// A 2x2 arrangement of orientations, row-major
pub type Template = [[i32; 2]; 2];

/// The tile-maker pinwheel and its three rotations
///
/// ```text
///   0  90
/// 270 180
/// ```
pub const TILE_MAKER_TEMPLATES: [Template; 4] = [
    [[0, 90], [270, 180]],
    [[270, 0], [180, 90]],
    [[180, 270], [90, 0]],
    [[90, 180], [0, 270]],
];

/// How well the grid repeats the tile-maker pinwheel
///
/// Every 2x2 window that equals the template counts 1. Along the border a
/// window is cut in half, so a matching pair on the first/last row or column
/// counts 0.5, and a matching corner cell counts 0.25. The best of the four
/// template rotations is divided by the number of whole templates that fit,
/// `(width / 2) × (height / 2)`. Only exact matches count.
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid has no valid shape
pub fn tile_maker_symmetry(values: &[i32], width: Option<usize>) -> Result<f64> {
    let shape = GridShape::resolve(values.len(), width)?;
    let view = shape.view(values)?;
    let (height, width) = (shape.height, shape.width);
    let cell = |row: usize, col: usize| view.get((row, col)).copied();

    let best = TILE_MAKER_TEMPLATES
        .iter()
        .map(|template| {
            let [[top_left, top_right], [bottom_left, bottom_right]] = *template;
            let mut finds = 0.0;

            for row in 0..height.saturating_sub(1) {
                for col in 0..width.saturating_sub(1) {
                    let window = [
                        [cell(row, col), cell(row, col + 1)],
                        [cell(row + 1, col), cell(row + 1, col + 1)],
                    ];
                    if window
                        == [
                            [Some(top_left), Some(top_right)],
                            [Some(bottom_left), Some(bottom_right)],
                        ]
                    {
                        finds += 1.0;
                    }
                }
            }

            // The first row shows the lower half of a template cut by the border
            for col in 0..width.saturating_sub(1) {
                if [cell(0, col), cell(0, col + 1)] == [Some(bottom_left), Some(bottom_right)] {
                    finds += 0.5;
                }
                if [cell(height - 1, col), cell(height - 1, col + 1)]
                    == [Some(top_left), Some(top_right)]
                {
                    finds += 0.5;
                }
            }
            for row in 0..height.saturating_sub(1) {
                if [cell(row, 0), cell(row + 1, 0)] == [Some(top_right), Some(bottom_right)] {
                    finds += 0.5;
                }
                if [cell(row, width - 1), cell(row + 1, width - 1)]
                    == [Some(top_left), Some(bottom_left)]
                {
                    finds += 0.5;
                }
            }

            let corners = [
                (cell(0, 0), bottom_right),
                (cell(0, width - 1), bottom_left),
                (cell(height - 1, 0), top_right),
                (cell(height - 1, width - 1), top_left),
            ];
            for (found, expected) in corners {
                if found == Some(expected) {
                    finds += 0.25;
                }
            }

            finds
        })
        .fold(0.0, f64::max);

    let max_finds = (width as f64 / 2.0) * (height as f64 / 2.0);
    Ok(best / max_finds)
}

/// Whether the grid reads as a spiral
///
/// The grid is split by its diagonals into top, right, bottom and left
/// triangles; cells on a diagonal belong to both neighbouring triangles.
/// The grid is spiral-like when every triangle has its own dominant
/// orientation, no orientation dominates two triangles, and each dominant
/// orientation covers at least a quarter of the grid.
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid is not square
pub fn is_spiral(values: &[i32]) -> Result<bool> {
    let side = GridShape::resolve_square(values.len(), None)?;
    let last = side - 1;

    // Sector order: top, right, bottom, left
    let mut sectors = [[0_usize; ORIENTATION_STATES]; 4];
    for (position, &value) in values.iter().enumerate() {
        let (i, j) = (position / side, position % side);
        let bucket = orientation_bucket(value);
        let memberships = [
            j >= i && i + j <= last,
            j >= i && i + j >= last,
            j <= i && i + j >= last,
            j <= i && i + j <= last,
        ];
        for (sector, member) in sectors.iter_mut().zip(memberships) {
            if member && let Some(count) = sector.get_mut(bucket) {
                *count += 1;
            }
        }
    }

    let threshold = values.len() as f64 / 4.0;
    let mut owner: [Option<usize>; ORIENTATION_STATES] = [None; ORIENTATION_STATES];

    for (index, sector) in sectors.iter().enumerate() {
        let dominant = sector.iter().copied().max().unwrap_or(0);
        for (bucket, &count) in sector.iter().enumerate() {
            if count != dominant {
                continue;
            }
            if (count as f64) < threshold {
                return Ok(false);
            }
            match owner.get_mut(bucket) {
                Some(slot) if slot.is_none() => *slot = Some(index),
                _ => return Ok(false),
            }
        }
    }

    Ok(true)
}
