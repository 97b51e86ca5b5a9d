//! Rotational symmetry between grid quadrants
//!
//! A grid with 2-fold rotational symmetry looks the same after a half turn:
//! each quadrant equals the diagonally opposite one turned by 180°. With
//! 4-fold symmetry every quadrant, turned 90° clockwise, equals its clockwise
//! neighbour. Turning a block moves its cells and, unless the grid is binary,
//! turns every tile in it as well.

use crate::io::configuration::{QUARTER_TURN_DEGREES, UNDEFINED_SCORE};
use crate::io::error::{AnalysisError, Result, ShapeIssue};
use crate::math::integer::exact_square_root;
use crate::spatial::grid::GridShape;
use crate::spatial::quadrants::{Quadrants, divide_into_quadrants};
use crate::spatial::tiles::{normalize_orientation, rotate_square, validate_rotation};

/// Number of quadrant comparisons in the 4-fold measure
const QUADRANT_COMPARISONS: f64 = 6.0;

/// Fraction of cells that agree after turning `source` clockwise onto `target`
///
/// `rotation_degrees` must be a multiple of 90; anything else is treated as
/// no rotation and logged. Odd quarter turns need a square block.
///
/// # Errors
///
/// Returns `AnalysisError::LengthMismatch` if the blocks differ in length and
/// `AnalysisError::Shape` if they are empty or an odd quarter turn is
/// requested for a non-square block
pub fn rotational_equivalence(
    source: &[i32],
    target: &[i32],
    rotation_degrees: i32,
    binary: bool,
) -> Result<f64> {
    check_comparable(source, target)?;
    let turns = validate_rotation(rotation_degrees).log("rotational_equivalence");

    let positioned = match (turns, exact_square_root(source.len())) {
        (0, _) => source.to_vec(),
        (2, _) => source.iter().rev().copied().collect(),
        (_, Some(_)) => {
            let mut rotated = source.to_vec();
            for _ in 0..turns {
                rotated = rotate_square(&rotated)?;
            }
            rotated
        }
        (_, None) => {
            return Err(AnalysisError::shape(source.len(), ShapeIssue::NotSquare));
        }
    };

    Ok(agreement(&positioned, target, turns, binary))
}

/// Fraction of cells that agree after turning only the values of `source`
///
/// Used for the middle strips, whose cells are already aligned by the way
/// the strips are stored.
fn strip_equivalence(source: &[i32], target: &[i32], turns: usize, binary: bool) -> Result<f64> {
    check_comparable(source, target)?;
    Ok(agreement(source, target, turns, binary))
}

fn check_comparable(source: &[i32], target: &[i32]) -> Result<()> {
    if source.len() != target.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: source.len(),
            found: target.len(),
        });
    }
    if source.is_empty() {
        return Err(AnalysisError::shape(0, ShapeIssue::Empty));
    }
    Ok(())
}

fn agreement(positioned: &[i32], target: &[i32], turns: usize, binary: bool) -> f64 {
    let turn = QUARTER_TURN_DEGREES * turns as i32;
    let mismatches = positioned
        .iter()
        .zip(target)
        .filter(|&(&value, &expected)| {
            let turned = if binary {
                value
            } else {
                normalize_orientation(normalize_orientation(value) + turn)
            };
            turned != expected
        })
        .count();

    1.0 - mismatches as f64 / positioned.len() as f64
}

/// Combine quadrant and middle-strip comparisons into the 4-fold score
///
/// The strips of an odd grid hold fewer cells than a quadrant, so their six
/// comparisons are weighted by `impact = 1 / (side / 2)` and the total is
/// divided by `6 + 6 × impact`. Even grids have no strips and divide by 6.
pub fn four_way_weighting(quadrant_total: f64, strip_total: Option<f64>, side: usize) -> f64 {
    match strip_total {
        Some(strip_total) => {
            let impact = 1.0 / (side as f64 / 2.0);
            impact.mul_add(strip_total, quadrant_total)
                / impact.mul_add(QUADRANT_COMPARISONS, QUADRANT_COMPARISONS)
        }
        None => quadrant_total / QUADRANT_COMPARISONS,
    }
}

/// Rotational symmetry scores of one grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationalSymmetries {
    /// 2-fold (180°) symmetry
    pub two_way: f64,
    /// 4-fold (90°) symmetry, `None` for non-square grids
    pub four_way: Option<f64>,
}

impl RotationalSymmetries {
    /// Scores as `[180°, 90°]`, with `-1` standing in for an undefined 4-fold score
    pub fn as_scores(&self) -> [f64; 2] {
        [
            self.two_way,
            self.four_way.unwrap_or(UNDEFINED_SCORE),
        ]
    }
}

/// Rotational symmetries of a grid
///
/// The 2-fold score averages the two diagonal quadrant pairs. The 4-fold
/// score adds the four clockwise neighbour comparisons and, for odd sides,
/// the middle strips; it is only defined for square grids.
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid has no valid shape and
/// `AnalysisError::LengthMismatch` if opposite quadrants cannot be compared
pub fn rotational_symmetries(
    values: &[i32],
    binary: bool,
    width: Option<usize>,
) -> Result<RotationalSymmetries> {
    let shape = GridShape::resolve(values.len(), width)?;
    let q = divide_into_quadrants(values, width)?;

    let half_turn_total = rotational_equivalence(&q.top_left, &q.bottom_right, 180, binary)?
        + rotational_equivalence(&q.top_right, &q.bottom_left, 180, binary)?;

    let four_way = if shape.is_square() {
        Some(four_way(&q, half_turn_total, shape.width, binary)?)
    } else {
        None
    };

    let symmetries = RotationalSymmetries {
        two_way: half_turn_total / 2.0,
        four_way,
    };
    tracing::debug!(?symmetries, "rotational symmetries");
    Ok(symmetries)
}

fn four_way(q: &Quadrants, half_turn_total: f64, side: usize, binary: bool) -> Result<f64> {
    let quadrant_total = half_turn_total
        + rotational_equivalence(&q.top_left, &q.top_right, 90, binary)?
        + rotational_equivalence(&q.top_right, &q.bottom_right, 90, binary)?
        + rotational_equivalence(&q.bottom_right, &q.bottom_left, 90, binary)?
        + rotational_equivalence(&q.bottom_left, &q.top_left, 90, binary)?;

    let strip_total = if q.has_middle_strips() {
        Some(
            strip_equivalence(&q.middle_top, &q.middle_right, 1, binary)?
                + strip_equivalence(&q.middle_right, &q.middle_bottom, 1, binary)?
                + strip_equivalence(&q.middle_bottom, &q.middle_left, 1, binary)?
                + strip_equivalence(&q.middle_left, &q.middle_top, 1, binary)?
                + strip_equivalence(&q.middle_top, &q.middle_bottom, 2, binary)?
                + strip_equivalence(&q.middle_right, &q.middle_left, 2, binary)?,
        )
    } else {
        None
    };

    Ok(four_way_weighting(quadrant_total, strip_total, side))
}
