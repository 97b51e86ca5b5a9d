//! Quadrant decomposition used by the rotational symmetry measures
//!
//! A grid is cut into four equally sized quadrants. When a dimension is odd
//! the middle row or column belongs to no quadrant; its two halves are kept
//! as separate strips so they can be compared on their own.

use ndarray::s;
use std::ops::Range;

use crate::io::error::Result;
use crate::spatial::grid::GridShape;

/// The four quadrants of a grid plus the middle strips of odd dimensions
///
/// Quadrants are stored row-major. Strips are stored from the grid edge
/// towards the centre, so a clockwise quarter turn of the grid maps each
/// strip onto the next one (top → right → bottom → left) element for element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quadrants {
    /// Top-left quadrant
    pub top_left: Vec<i32>,
    /// Top-right quadrant
    pub top_right: Vec<i32>,
    /// Bottom-left quadrant
    pub bottom_left: Vec<i32>,
    /// Bottom-right quadrant
    pub bottom_right: Vec<i32>,
    /// Upper half of the middle column (odd width only)
    pub middle_top: Vec<i32>,
    /// Right half of the middle row (odd height only)
    pub middle_right: Vec<i32>,
    /// Lower half of the middle column (odd width only)
    pub middle_bottom: Vec<i32>,
    /// Left half of the middle row (odd height only)
    pub middle_left: Vec<i32>,
}

impl Quadrants {
    /// Whether any middle strip was populated
    pub fn has_middle_strips(&self) -> bool {
        !(self.middle_top.is_empty()
            && self.middle_right.is_empty()
            && self.middle_bottom.is_empty()
            && self.middle_left.is_empty())
    }

    /// All eight parts in the order TL, TR, BL, BR, MT, MR, MB, ML
    pub fn as_array(&self) -> [&[i32]; 8] {
        [
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
            &self.middle_top,
            &self.middle_right,
            &self.middle_bottom,
            &self.middle_left,
        ]
    }
}

/// Split a grid into quadrants and, for odd dimensions, middle strips
///
/// The exact centre cell of an odd square grid belongs to nothing.
///
/// # Errors
///
/// Returns `AnalysisError::Shape` if the grid has no valid shape
pub fn divide_into_quadrants(values: &[i32], width: Option<usize>) -> Result<Quadrants> {
    let shape = GridShape::resolve(values.len(), width)?;
    let view = shape.view(values)?;

    let half_height = shape.height / 2;
    let half_width = shape.width / 2;
    let odd_height = shape.height % 2 == 1;
    let odd_width = shape.width % 2 == 1;
    let bottom_start = half_height + usize::from(odd_height);
    let right_start = half_width + usize::from(odd_width);

    let block = |rows: Range<usize>, cols: Range<usize>| -> Vec<i32> {
        view.slice(s![rows, cols]).iter().copied().collect()
    };

    let mut quadrants = Quadrants {
        top_left: block(0..half_height, 0..half_width),
        top_right: block(0..half_height, right_start..shape.width),
        bottom_left: block(bottom_start..shape.height, 0..half_width),
        bottom_right: block(bottom_start..shape.height, right_start..shape.width),
        ..Quadrants::default()
    };

    if odd_width {
        quadrants.middle_top = view.slice(s![..half_height, half_width]).to_vec();
        quadrants.middle_bottom = view.slice(s![bottom_start..;-1, half_width]).to_vec();
    }
    if odd_height {
        quadrants.middle_left = view.slice(s![half_height, ..half_width]).to_vec();
        quadrants.middle_right = view.slice(s![half_height, right_start..;-1]).to_vec();
    }

    Ok(quadrants)
}
