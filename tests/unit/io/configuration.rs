//! Tests for analysis constants

#[cfg(test)]
mod tests {
    use flextiles::io::configuration::{
        ANALYSIS_HEADER, CLICK_COUNT_HEADER, CLICK_SEQUENCE_HEADER, FINAL_STATE_HEADER,
        FULL_TURN_DEGREES, GLYPH_HEADER, ORIENTATION_STATES, OUTPUT_SUFFIX, QUARTER_TURN_DEGREES,
        REPORT_DECIMAL_PLACES, SESSION_EXTENSIONS, UNDEFINED_SCORE,
    };

    // Tests the orientation model is four quarter turns
    // Verified by changing the quarter turn to 45
    #[test]
    fn test_orientation_model_consistent() {
        assert_eq!(ORIENTATION_STATES, 4);
        assert_eq!(QUARTER_TURN_DEGREES * ORIENTATION_STATES as i32, FULL_TURN_DEGREES);
    }

    // Tests report formatting values
    // Verified by changing constant values
    #[test]
    fn test_report_constants() {
        assert_eq!(REPORT_DECIMAL_PLACES, 3);
        assert_eq!(UNDEFINED_SCORE, -1.0);
        assert_eq!(OUTPUT_SUFFIX, "_report");
        assert!(SESSION_EXTENSIONS.contains(&"csv"));
    }

    // Tests section headers are distinct comment lines
    // Verified by reusing one header for two sections
    #[test]
    fn test_section_headers_distinct() {
        let headers = [
            FINAL_STATE_HEADER,
            CLICK_COUNT_HEADER,
            GLYPH_HEADER,
            ANALYSIS_HEADER,
            CLICK_SEQUENCE_HEADER,
        ];
        for (index, header) in headers.iter().enumerate() {
            assert!(header.starts_with("# "));
            assert!(!headers.iter().skip(index + 1).any(|other| other == header));
        }
    }
}
