//! Tests for mirror symmetry scorers

#[cfg(test)]
mod tests {
    use flextiles::io::error::{AnalysisError, ShapeIssue};
    use flextiles::analysis::symmetry::{
        first_diagonal_symmetry, horizontal_symmetry, is_palindrome, palindrome_difference,
        second_diagonal_symmetry, symmetry_values, vertical_symmetry,
    };
    use flextiles::spatial::tiles::ReflectionAxis;

    const PINWHEEL: [i32; 4] = [0, 90, 270, 180];

    // Tests plain palindromes ignore the middle element
    // Verified by comparing the middle element with itself through the axis rule
    #[test]
    fn test_palindrome_difference_plain() {
        assert_eq!(palindrome_difference(&[1, 2, 3, 2, 1], None), 0);
        assert_eq!(palindrome_difference(&[1, 2, 3, 4, 5], None), 2);
        assert!(is_palindrome(&[7], None));
        assert!(is_palindrome(&[], None));
    }

    // Tests the far half is reflected through the axis before comparing
    // Verified by reflecting the near half instead of the far half
    #[test]
    fn test_palindrome_difference_with_axis() {
        // Vertical mirror: 0 <-> 90, 180 <-> 270
        assert!(is_palindrome(&[0, 180, 270, 90], Some(ReflectionAxis::Vertical)));
        assert_eq!(
            palindrome_difference(&[0, 0], Some(ReflectionAxis::Vertical)),
            1
        );
    }

    // Tests horizontal symmetry folds each column top onto bottom
    // Verified by folding rows instead of columns
    #[test]
    fn test_horizontal_symmetry() {
        let grid = [0, 0, 270, 270];
        assert_eq!(horizontal_symmetry(&grid, false, None).ok(), Some(1.0));
        assert_eq!(vertical_symmetry(&grid, false, None).ok(), Some(0.0));
    }

    // Tests vertical symmetry folds each row left onto right
    // Verified by using the horizontal reflection rule for rows
    #[test]
    fn test_vertical_symmetry() {
        let grid = [0, 90, 180, 270, 270, 180];
        assert_eq!(vertical_symmetry(&grid, false, Some(2)).ok(), Some(1.0));
    }

    // Tests the pinwheel is symmetric along every axis
    // Verified by using the first diagonal rule on anti-diagonals
    #[test]
    fn test_pinwheel_all_axes() {
        let scores = symmetry_values(&PINWHEEL, false, None);
        for score in scores {
            assert_eq!(score.ok(), Some(1.0));
        }
    }

    // Tests binary mode compares raw values without reflection
    // Verified by applying the axis rule in binary mode
    #[test]
    fn test_binary_mode_compares_raw_values() {
        let uniform = [0; 16];
        assert_eq!(horizontal_symmetry(&uniform, true, None).ok(), Some(1.0));
        assert_eq!(horizontal_symmetry(&uniform, false, None).ok(), Some(0.0));
    }

    // Tests diagonal scorers refuse non-square grids
    // Verified by resolving diagonals on the rectangular view
    #[test]
    fn test_diagonals_require_square() {
        let grid = [0; 6];
        assert!(horizontal_symmetry(&grid, false, Some(3)).is_ok());
        assert!(matches!(
            first_diagonal_symmetry(&grid, false, Some(3)),
            Err(AnalysisError::Shape { issue: ShapeIssue::NotSquare, .. })
        ));
        assert!(matches!(
            second_diagonal_symmetry(&grid, false, Some(3)),
            Err(AnalysisError::Shape { issue: ShapeIssue::NotSquare, .. })
        ));
    }

    // Tests a prime-length grid without width has no score on any axis
    // Verified by treating prime lengths as a single row
    #[test]
    fn test_prime_length_rejected() {
        let scores = symmetry_values(&[0; 7], false, None);
        assert!(scores.iter().all(|score| score
            .as_ref()
            .is_err_and(AnalysisError::is_undefined_score)));
    }

    // Tests scores stay within [0, 1] for a fully asymmetric row
    // Verified by dividing by the full length instead of half
    #[test]
    fn test_score_lower_bound() {
        let grid = [0, 0, 0, 0, 90, 90, 90, 90, 0];
        let score = vertical_symmetry(&grid, true, None).expect("3x3 grid");
        assert!((0.0..=1.0).contains(&score));
    }
}
