//! Grid shape inference and line extraction over flat orientation grids
//!
//! A grid is a flat, row-major sequence of orientation values. Its width is
//! either declared by the caller or inferred from a perfect-square length.
//! Once the shape is known the values are viewed as an `ndarray` matrix so
//! rows, columns and diagonals can be read without index arithmetic.

use ndarray::{ArrayView2, Axis, s};
use serde::Serialize;

use crate::io::error::{AnalysisError, Result, ShapeIssue};
use crate::math::integer::{exact_square_root, is_prime};

/// Rectangular interpretation of a flat grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridShape {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridShape {
    /// Infer the shape of a grid holding `len` values
    ///
    /// Without a width (or with a width of 0) the grid must be square. With a
    /// width, a prime length is rejected and the width must divide the length.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Shape` if no rectangular interpretation exists
    pub fn resolve(len: usize, width: Option<usize>) -> Result<Self> {
        if len == 0 {
            return Err(AnalysisError::shape(len, ShapeIssue::Empty));
        }

        match width.filter(|&w| w > 0) {
            None => exact_square_root(len)
                .map(|side| Self {
                    width: side,
                    height: side,
                })
                .ok_or(AnalysisError::shape(len, ShapeIssue::WidthUnspecified)),
            Some(_) if is_prime(len) => Err(AnalysisError::shape(len, ShapeIssue::NoMatrixSize)),
            Some(w) if len % w != 0 => {
                Err(AnalysisError::shape(len, ShapeIssue::Indivisible { width: w }))
            }
            Some(w) => Ok(Self {
                width: w,
                height: len / w,
            }),
        }
    }

    /// Resolve a shape that must also be square, returning its side length
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Shape` with `NoMatrixSize` for prime lengths and
    /// `NotSquare` for any other non-square interpretation
    pub fn resolve_square(len: usize, width: Option<usize>) -> Result<usize> {
        let shape = match Self::resolve(len, width) {
            Err(AnalysisError::Shape {
                issue: ShapeIssue::WidthUnspecified,
                ..
            }) => {
                let issue = if is_prime(len) {
                    ShapeIssue::NoMatrixSize
                } else {
                    ShapeIssue::NotSquare
                };
                return Err(AnalysisError::shape(len, issue));
            }
            other => other?,
        };

        if shape.is_square() {
            Ok(shape.width)
        } else {
            Err(AnalysisError::shape(len, ShapeIssue::NotSquare))
        }
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the shape holds no cells
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether rows and columns are equally many
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Width to hand to the metrics: none for square grids, the column count otherwise
    pub const fn metric_width(&self) -> Option<usize> {
        if self.is_square() {
            None
        } else {
            Some(self.width)
        }
    }

    /// View `values` as a `height × width` matrix
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Shape` if `values` does not hold exactly
    /// `width * height` cells
    pub fn view<'a>(&self, values: &'a [i32]) -> Result<ArrayView2<'a, i32>> {
        ArrayView2::from_shape((self.height, self.width), values).map_err(|_shape_error| {
            AnalysisError::shape(
                values.len(),
                ShapeIssue::Indivisible { width: self.width },
            )
        })
    }
}

/// Every row, top to bottom
pub fn rows(view: &ArrayView2<'_, i32>) -> Vec<Vec<i32>> {
    view.rows().into_iter().map(|row| row.to_vec()).collect()
}

/// Every column, left to right, each read top to bottom
pub fn columns(view: &ArrayView2<'_, i32>) -> Vec<Vec<i32>> {
    view.columns()
        .into_iter()
        .map(|column| column.to_vec())
        .collect()
}

/// Every line parallel to the main diagonal, read top-left to bottom-right
///
/// Includes the single-cell lines in the corners.
pub fn diagonals(view: &ArrayView2<'_, i32>) -> Vec<Vec<i32>> {
    let (height, width) = view.dim();
    let mut lines = Vec::with_capacity(height + width);

    for column in 0..width {
        lines.push(view.slice(s![.., column..]).diag().to_vec());
    }
    for row in 1..height {
        lines.push(view.slice(s![row.., ..]).diag().to_vec());
    }

    lines
}

/// Every line parallel to the anti-diagonal, read bottom-left to top-right
pub fn anti_diagonals(view: &ArrayView2<'_, i32>) -> Vec<Vec<i32>> {
    let mut flipped = view.view();
    flipped.invert_axis(Axis(0));
    diagonals(&flipped)
}
