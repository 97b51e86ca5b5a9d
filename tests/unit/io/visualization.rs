//! Tests for glyph renderings of grids

#[cfg(test)]
mod tests {
    use flextiles::io::visualization::{arrow_glyph, binary_glyph, render_arrows, render_binary};

    // Tests each orientation has its own arrow
    // Verified by swapping the 90 and 270 arrows
    #[test]
    fn test_arrow_glyphs() {
        assert_eq!(arrow_glyph(0), '^');
        assert_eq!(arrow_glyph(90), '>');
        assert_eq!(arrow_glyph(180), 'v');
        assert_eq!(arrow_glyph(270), '<');
        assert_eq!(arrow_glyph(45), '?');
    }

    // Tests only the 0 state renders as X
    // Verified by mapping 180 to X
    #[test]
    fn test_binary_glyphs() {
        assert_eq!(binary_glyph(0), 'X');
        assert_eq!(binary_glyph(90), 'O');
        assert_eq!(binary_glyph(180), 'O');
    }

    // Tests a uniform grid renders as identical rows
    // Verified by chunking by height instead of width
    #[test]
    fn test_uniform_grid_rows() {
        let rows = render_arrows(&[0; 9], None).expect("3x3 grid");
        assert_eq!(rows, vec!["^^^".to_string(); 3]);
    }

    // Tests rows follow the declared width
    // Verified by inferring a square from the length
    #[test]
    fn test_rectangle_rows() {
        let rows = render_binary(&[0, 90, 0, 180, 0, 0], Some(3)).expect("2x3 grid");
        assert_eq!(rows, vec!["XOX".to_string(), "OXX".to_string()]);

        let arrows = render_arrows(&[0, 90, 180, 270], None).expect("2x2 grid");
        assert_eq!(arrows, vec!["^>".to_string(), "v<".to_string()]);
    }

    // Tests grids without a shape are not rendered
    // Verified by rendering a prime length as one row
    #[test]
    fn test_invalid_shape() {
        assert!(render_arrows(&[0; 7], None).is_err());
    }
}
