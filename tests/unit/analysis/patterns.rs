//! Tests for tile-maker template matching and spiral classification

#[cfg(test)]
mod tests {
    use flextiles::analysis::patterns::{TILE_MAKER_TEMPLATES, is_spiral, tile_maker_symmetry};
    use flextiles::io::error::{AnalysisError, ShapeIssue};

    // Tests every template is the previous one with its cells turned clockwise
    // Verified by listing a template counter-clockwise
    #[test]
    fn test_templates_are_rotations() {
        for (previous, next) in TILE_MAKER_TEMPLATES.iter().zip(TILE_MAKER_TEMPLATES.iter().skip(1)) {
            let [[a, b], [c, d]] = *previous;
            assert_eq!(*next, [[c, a], [d, b]]);
        }
    }

    // Tests a single pinwheel scores exactly one full match
    // Verified by dividing by the number of windows instead of whole templates
    #[test]
    fn test_single_pinwheel() {
        let score = tile_maker_symmetry(&[0, 90, 270, 180], None).expect("2x2 grid");
        assert!((score - 1.0).abs() < 1e-12);
    }

    // Tests a tiled pinwheel keeps the full score
    // Verified by counting only windows that start on even rows
    #[test]
    fn test_tiled_pinwheel() {
        let grid = [
            0, 90, 0, 90, //
            270, 180, 270, 180, //
            0, 90, 0, 90, //
            270, 180, 270, 180,
        ];
        let score = tile_maker_symmetry(&grid, None).expect("4x4 grid");
        assert!((score - 1.0).abs() < 1e-12);
    }

    // Tests a uniform grid matches nothing
    // Verified by giving partial credit to single equal cells
    #[test]
    fn test_uniform_grid_scores_zero() {
        let score = tile_maker_symmetry(&[0; 16], None).expect("4x4 grid");
        assert!(score.abs() < 1e-12);
    }

    // Tests border pairs count half and corners a quarter
    // Verified by weighting border pairs as full matches
    #[test]
    fn test_border_and_corner_credit() {
        // First row is the lower half of the pinwheel, the rest does not match
        let grid = [
            270, 180, 45, //
            45, 45, 45, //
            45, 45, 45,
        ];
        let score = tile_maker_symmetry(&grid, None).expect("3x3 grid");
        // 0.5 for the border pair, max finds (3/2)^2 = 2.25
        assert!((score - 0.5 / 2.25).abs() < 1e-12);
    }

    // Tests invalid shapes have no score
    // Verified by resolving prime lengths to a single row
    #[test]
    fn test_invalid_shape() {
        assert!(matches!(
            tile_maker_symmetry(&[0; 7], None),
            Err(AnalysisError::Shape { issue: ShapeIssue::WidthUnspecified, .. })
        ));
    }

    // Tests a four-armed spiral is recognised
    // Verified by requiring a strict majority in each sector
    #[test]
    fn test_spiral_detected() {
        let grid = [
            0, 0, 0, 90, //
            270, 0, 90, 90, //
            270, 270, 180, 90, //
            270, 180, 180, 180,
        ];
        assert_eq!(is_spiral(&grid).ok(), Some(true));
    }

    // Tests a uniform grid is not a spiral
    // Verified by allowing one orientation to dominate several sectors
    #[test]
    fn test_uniform_grid_is_not_spiral() {
        assert_eq!(is_spiral(&[0; 16]).ok(), Some(false));
    }

    // Tests spiral classification needs a square grid
    // Verified by inferring a rectangle from the length
    #[test]
    fn test_spiral_requires_square() {
        assert!(is_spiral(&[0; 6]).is_err());
    }
}
