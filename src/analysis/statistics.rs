//! Orientation statistics over a whole grid

use crate::io::configuration::{FULL_TURN_DEGREES, ORIENTATION_STATES};
use crate::math::probability::normalize_counts;

/// Index of the 90°-wide window an angle falls into
///
/// Windows are centred on 0, 90, 180 and 270 and closed at their upper end:
/// `(315, 45]`, `(45, 135]`, `(135, 225]`, `(225, 315]`.
pub const fn orientation_bucket(value: i32) -> usize {
    let angle = value.rem_euclid(FULL_TURN_DEGREES);
    if angle > 315 || angle <= 45 {
        0
    } else if angle <= 135 {
        1
    } else if angle <= 225 {
        2
    } else {
        3
    }
}

/// Count the cells in each orientation window `[0, 90, 180, 270]`
pub fn orientation_histogram(values: &[i32]) -> [usize; ORIENTATION_STATES] {
    let mut counts = [0; ORIENTATION_STATES];
    for &value in values {
        if let Some(count) = counts.get_mut(orientation_bucket(value)) {
            *count += 1;
        }
    }
    counts
}

/// Share of cells in each orientation window; sums to 1 for a non-empty grid
pub fn orientation_ratios(values: &[i32]) -> [f64; ORIENTATION_STATES] {
    normalize_counts(orientation_histogram(values))
}

/// Translational symmetry derived from the orientation entropy
///
/// Two bits is the entropy of a uniform distribution over four orientations,
/// so the measure runs from 1 (a single orientation) down to 0.
pub fn translational_symmetry(entropy: f64) -> f64 {
    1.0 - entropy / 2.0
}
