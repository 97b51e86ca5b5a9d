//! Orientation primitives for rotated-tile grids
//!
//! Each cell stores the rotation of one tile in degrees, clockwise, from the
//! set {0, 90, 180, 270}. Rotating a grid moves cells to new positions; an
//! angle-aware rotation additionally turns every tile by the same quarter
//! turn, which is what a physical rotation of the whole arrangement does.
//! Reflections map orientations through an axis-specific rule.

use crate::io::configuration::{FULL_TURN_DEGREES, ORIENTATION_STATES, QUARTER_TURN_DEGREES};
use crate::io::error::{AnalysisError, Result, ShapeIssue, ValueWarning, Validated, invalid_parameter};
use crate::math::integer::exact_square_root;

/// The four valid orientation values in degrees
pub const ORIENTATIONS: [i32; ORIENTATION_STATES] = [0, 90, 180, 270];

/// Reflection axis with its numeric axis code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionAxis {
    /// Mirror across the vertical axis (code 0)
    Vertical,
    /// Mirror across the first diagonal (code 1)
    FirstDiagonal,
    /// Mirror across the horizontal axis (code 2)
    Horizontal,
    /// Mirror across the second diagonal (code 3)
    SecondDiagonal,
}

impl ReflectionAxis {
    /// Interpret an axis code; codes wrap modulo 4
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` for negative codes
    pub fn from_code(code: i32) -> Result<Self> {
        if code < 0 {
            return Err(invalid_parameter(
                "axis",
                &code,
                &"negative axis value",
            ));
        }
        Ok(match code % 4 {
            0 => Self::Vertical,
            1 => Self::FirstDiagonal,
            2 => Self::Horizontal,
            _ => Self::SecondDiagonal,
        })
    }

    /// Numeric code of the axis
    pub const fn code(self) -> i32 {
        match self {
            Self::Vertical => 0,
            Self::FirstDiagonal => 1,
            Self::Horizontal => 2,
            Self::SecondDiagonal => 3,
        }
    }

    /// Orientation a tile takes after being mirrored across this axis
    pub const fn reflect(self, value: i32) -> i32 {
        let offset = match self {
            Self::Vertical => 90,
            Self::FirstDiagonal => 180,
            Self::Horizontal => 270,
            Self::SecondDiagonal => 0,
        };
        (offset - normalize_orientation(value)).rem_euclid(FULL_TURN_DEGREES)
    }
}

/// Reduce an angle into `[0, 360)`
pub const fn normalize_orientation(value: i32) -> i32 {
    value.rem_euclid(FULL_TURN_DEGREES)
}

/// Mirror every value across `axis`
pub fn invert_by_axis(values: &[i32], axis: ReflectionAxis) -> Vec<i32> {
    values.iter().map(|&value| axis.reflect(value)).collect()
}

/// Rotate the positions of a square grid 90° clockwise
///
/// `new[i*L + j] = old[(L-j-1)*L + i]`; values are untouched.
///
/// # Errors
///
/// Returns `AnalysisError::Shape` with `NotSquare` if the length is not a
/// perfect square
pub fn rotate_square(values: &[i32]) -> Result<Vec<i32>> {
    let side = exact_square_root(values.len())
        .ok_or(AnalysisError::shape(values.len(), ShapeIssue::NotSquare))?;

    let mut rotated = Vec::with_capacity(values.len());
    for i in 0..side {
        for j in 0..side {
            let source = (side - j - 1) * side + i;
            rotated.push(values.get(source).copied().unwrap_or_default());
        }
    }
    Ok(rotated)
}

/// Rotate a grid 90° clockwise, turning every tile with it
///
/// Non-square grids cannot be rotated positionally and keep their layout;
/// their values are still turned.
pub fn angle_aware_rotate(values: &[i32]) -> Vec<i32> {
    let positioned = rotate_square(values).unwrap_or_else(|_not_square| values.to_vec());
    positioned.into_iter().map(turn_clockwise).collect()
}

/// Add one quarter turn to a single orientation
pub const fn turn_clockwise(value: i32) -> i32 {
    (normalize_orientation(value) + QUARTER_TURN_DEGREES) % FULL_TURN_DEGREES
}

/// Number of angle-aware quarter turns that map `source` onto `target`
///
/// Returns `Ok(None)` when no rotation matches.
///
/// # Errors
///
/// Returns `AnalysisError::LengthMismatch` if the grids differ in length
pub fn rotation_of(source: &[i32], target: &[i32]) -> Result<Option<u8>> {
    if source.len() != target.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: source.len(),
            found: target.len(),
        });
    }

    let mut current = source.to_vec();
    for turns in 0..4 {
        if current == target {
            return Ok(Some(turns));
        }
        current = angle_aware_rotate(&current);
    }
    Ok(None)
}

/// Validate raw orientations, replacing anything off the 90° lattice with 0
///
/// Values are normalised into `[0, 360)` first, so 450 becomes 90.
pub fn validate_orientations(values: &[i32]) -> Validated<Vec<i32>> {
    let mut warnings = Vec::new();
    let value = values
        .iter()
        .enumerate()
        .map(|(index, &raw)| {
            let normalized = normalize_orientation(raw);
            if normalized % QUARTER_TURN_DEGREES == 0 {
                normalized
            } else {
                warnings.push(ValueWarning::UnexpectedOrientation { index, value: raw });
                0
            }
        })
        .collect();

    Validated { value, warnings }
}

/// Convert a rotation in degrees into clockwise quarter turns (0..4)
///
/// Rotations that are not a multiple of 90° are treated as no rotation.
pub fn validate_rotation(degrees: i32) -> Validated<usize> {
    if degrees % QUARTER_TURN_DEGREES != 0 {
        return Validated {
            value: 0,
            warnings: vec![ValueWarning::UnexpectedRotation { degrees }],
        };
    }
    Validated::clean((degrees / QUARTER_TURN_DEGREES).rem_euclid(4) as usize)
}
