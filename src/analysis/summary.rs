//! All metrics of one grid, rounded for reporting

use serde::Serialize;

use crate::analysis::patterns::{is_spiral, tile_maker_symmetry};
use crate::analysis::rotational::rotational_symmetries;
use crate::analysis::statistics::{orientation_ratios, translational_symmetry};
use crate::analysis::symmetry::symmetry_values;
use crate::io::configuration::{ORIENTATION_STATES, REPORT_DECIMAL_PLACES, UNDEFINED_SCORE};
use crate::io::error::score_or_sentinel;
use crate::math::probability::{round_to, shannon_entropy};
use crate::spatial::grid::GridShape;

/// Metrics of a grid, each rounded to three places
///
/// Metrics that are undefined for the grid's shape hold `-1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridAnalysis {
    /// Shannon entropy of the orientation ratios, in bits
    pub entropy: f64,
    /// Share of cells per orientation `[0, 90, 180, 270]`
    pub orientation_ratios: [f64; ORIENTATION_STATES],
    /// Mirror symmetries `[horizontal, vertical, 1st diagonal, 2nd diagonal]`
    pub symmetries: [f64; 4],
    /// `1 - entropy / 2`
    pub translational_symmetry: f64,
    /// Best match against the tile-maker pinwheel
    pub tile_maker_symmetry: f64,
    /// Rotational symmetries `[180°, 90°]`
    pub rotational_symmetries: [f64; 2],
    /// Spiral classification: 1 yes, 0 no, -1 undefined
    pub spiral: f64,
}

impl GridAnalysis {
    /// Compute every metric for a grid of the given shape
    ///
    /// Square grids are analysed without an explicit width, others with
    /// their column count, so shape rules match the individual metrics.
    pub fn compute(values: &[i32], shape: GridShape, binary: bool) -> Self {
        let width = shape.metric_width();
        let round = |value: f64| round_to(value, REPORT_DECIMAL_PLACES);

        let ratios = orientation_ratios(values);
        let entropy = round(shannon_entropy(&ratios));

        let symmetries = symmetry_values(values, binary, width).map(|score| {
            let value = score_or_sentinel(&score);
            round(value)
        });

        let rotational = rotational_symmetries(values, binary, width)
            .map_or([UNDEFINED_SCORE; 2], |symmetries| symmetries.as_scores())
            .map(round);

        let tile_maker = round(score_or_sentinel(&tile_maker_symmetry(values, width)));

        let spiral = is_spiral(values).map(|spiral| f64::from(u8::from(spiral)));
        let spiral = score_or_sentinel(&spiral);

        Self {
            entropy,
            orientation_ratios: ratios.map(round),
            symmetries,
            translational_symmetry: round(translational_symmetry(entropy)),
            tile_maker_symmetry: tile_maker,
            rotational_symmetries: rotational,
            spiral,
        }
    }
}
