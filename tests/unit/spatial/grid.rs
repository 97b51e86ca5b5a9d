//! Tests for grid shape inference and line extraction

#[cfg(test)]
mod tests {
    use flextiles::io::error::{AnalysisError, ShapeIssue};
    use flextiles::spatial::grid::{GridShape, anti_diagonals, columns, diagonals, rows};

    fn issue_of(result: flextiles::Result<GridShape>) -> Option<ShapeIssue> {
        match result {
            Err(AnalysisError::Shape { issue, .. }) => Some(issue),
            _ => None,
        }
    }

    // Tests perfect-square lengths resolve without a width
    // Verified by requiring an explicit width
    #[test]
    fn test_resolve_square_without_width() {
        let shape = GridShape::resolve(9, None).expect("9 is a perfect square");
        assert_eq!(shape, GridShape { width: 3, height: 3 });
        assert!(shape.is_square());
        assert_eq!(shape.len(), 9);
        assert_eq!(shape.metric_width(), None);
    }

    // Tests a zero width is treated as no width
    // Verified by dividing by the zero width
    #[test]
    fn test_resolve_zero_width_means_unspecified() {
        let shape = GridShape::resolve(16, Some(0)).expect("16 is a perfect square");
        assert_eq!(shape.width, 4);
        assert_eq!(issue_of(GridShape::resolve(8, Some(0))), Some(ShapeIssue::WidthUnspecified));
    }

    // Tests the shape errors in the order they are checked
    // Verified by checking divisibility before primality
    #[test]
    fn test_resolve_rejections() {
        assert_eq!(issue_of(GridShape::resolve(0, None)), Some(ShapeIssue::Empty));
        assert_eq!(issue_of(GridShape::resolve(8, None)), Some(ShapeIssue::WidthUnspecified));
        assert_eq!(issue_of(GridShape::resolve(7, Some(7))), Some(ShapeIssue::NoMatrixSize));
        assert_eq!(
            issue_of(GridShape::resolve(6, Some(4))),
            Some(ShapeIssue::Indivisible { width: 4 })
        );
    }

    // Tests a declared width gives a rectangle
    // Verified by swapping width and height
    #[test]
    fn test_resolve_rectangle() {
        let shape = GridShape::resolve(6, Some(3)).expect("3 divides 6");
        assert_eq!(shape, GridShape { width: 3, height: 2 });
        assert!(!shape.is_square());
        assert_eq!(shape.metric_width(), Some(3));
    }

    // Tests square-only resolution distinguishes prime and non-square lengths
    // Verified by reporting NotSquare for prime lengths
    #[test]
    fn test_resolve_square_only() {
        assert_eq!(GridShape::resolve_square(16, Some(4)).ok(), Some(4));

        let prime = GridShape::resolve_square(7, None);
        assert!(matches!(
            prime,
            Err(AnalysisError::Shape { issue: ShapeIssue::NoMatrixSize, .. })
        ));

        let not_square = GridShape::resolve_square(8, None);
        assert!(matches!(
            not_square,
            Err(AnalysisError::Shape { issue: ShapeIssue::NotSquare, .. })
        ));

        let rectangle = GridShape::resolve_square(6, Some(3));
        assert!(matches!(
            rectangle,
            Err(AnalysisError::Shape { issue: ShapeIssue::NotSquare, .. })
        ));
    }

    // Tests a view rejects values that do not fill the shape
    // Verified by viewing a prefix of the values
    #[test]
    fn test_view_requires_exact_length() {
        let shape = GridShape { width: 3, height: 3 };
        assert!(shape.view(&[0; 8]).is_err());
        assert!(shape.view(&[0; 9]).is_ok());
    }

    // Tests rows and columns read in row-major and column order
    // Verified by transposing the view
    #[test]
    fn test_rows_and_columns() {
        let values = [1, 2, 3, 4, 5, 6];
        let shape = GridShape::resolve(values.len(), Some(3)).expect("valid shape");
        let view = shape.view(&values).expect("values fill the shape");

        assert_eq!(rows(&view), vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(columns(&view), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    // Tests every diagonal line is produced once, corners included
    // Verified by starting the row loop at 0 (duplicates the main diagonal)
    #[test]
    fn test_diagonals_of_square() {
        let values: Vec<i32> = (1..=9).collect();
        let shape = GridShape::resolve(values.len(), None).expect("valid shape");
        let view = shape.view(&values).expect("values fill the shape");

        assert_eq!(
            diagonals(&view),
            vec![vec![1, 5, 9], vec![2, 6], vec![3], vec![4, 8], vec![7]]
        );
    }

    // Tests anti-diagonals read bottom-left to top-right
    // Verified by flipping columns instead of rows
    #[test]
    fn test_anti_diagonals_of_square() {
        let values: Vec<i32> = (1..=9).collect();
        let shape = GridShape::resolve(values.len(), None).expect("valid shape");
        let view = shape.view(&values).expect("values fill the shape");

        assert_eq!(
            anti_diagonals(&view),
            vec![vec![7, 5, 3], vec![8, 6], vec![9], vec![4, 2], vec![1]]
        );
    }
}
