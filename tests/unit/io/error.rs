//! Tests for error types, value warnings and path context

#[cfg(test)]
mod tests {
    use flextiles::io::error::{
        AnalysisError, ShapeIssue, Validated, ValueWarning, WithPath, invalid_parameter,
        invalid_session, score_or_sentinel,
    };
    use std::error::Error;
    use std::path::Path;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AnalysisError::FileSystem {
            path: "/tmp/session.csv".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(AnalysisError::shape(7, ShapeIssue::NoMatrixSize).source().is_none());
    }

    // Tests shape errors name the length and the issue
    // Verified by omitting the issue from the message
    #[test]
    fn test_shape_error_message() {
        let message = AnalysisError::shape(6, ShapeIssue::Indivisible { width: 4 }).to_string();
        assert!(message.contains("length 6"));
        assert!(message.contains("width 4"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("axis", &-1, &"negative axis value").to_string();
        assert!(message.contains("axis"));
        assert!(message.contains("-1"));
        assert!(message.contains("negative axis value"));
    }

    // Tests only shape and length errors stand for an undefined score
    // Verified by counting parameter errors as undefined scores
    #[test]
    fn test_undefined_score_kinds() {
        assert!(AnalysisError::shape(0, ShapeIssue::Empty).is_undefined_score());
        assert!(
            AnalysisError::LengthMismatch {
                expected: 4,
                found: 3
            }
            .is_undefined_score()
        );
        assert!(!invalid_session(1, &"bad").is_undefined_score());
    }

    // Tests failed metrics become the -1 sentinel
    // Verified by returning 0 for failed metrics
    #[test]
    fn test_score_or_sentinel() {
        assert_eq!(score_or_sentinel(&Ok(0.75)), 0.75);
        let failed = Err(AnalysisError::shape(7, ShapeIssue::WidthUnspecified));
        assert_eq!(score_or_sentinel(&failed), -1.0);
        let unexpected = Err(invalid_session(3, &"bad"));
        assert_eq!(score_or_sentinel(&unexpected), -1.0);
    }

    // Tests path context replaces the placeholder path of converted I/O errors
    // Verified by leaving the placeholder in place
    #[test]
    fn test_with_path_on_io_error() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
        let error = result
            .with_path(Path::new("out/report.csv"), "writing report")
            .expect_err("error is kept");

        let message = error.to_string();
        assert!(message.contains("out/report.csv"));
        assert!(message.contains("writing report"));
    }

    // Tests path context is attached to session errors
    // Verified by only handling file system errors
    #[test]
    fn test_with_path_on_session_error() {
        let result: flextiles::Result<()> = Err(invalid_session(3, &"ragged row"));
        let error = result
            .with_path(Path::new("ft_1.csv"), "parsing session")
            .expect_err("error is kept");

        assert!(matches!(
            &error,
            AnalysisError::InvalidSessionData { path: Some(path), line: 3, .. }
                if path == Path::new("ft_1.csv")
        ));
        assert!(error.to_string().contains("line 3"));
    }

    // Tests warnings describe the substitution made
    // Verified by omitting the offending token
    #[test]
    fn test_warning_messages() {
        let warning = ValueWarning::NonNumeric {
            index: 2,
            token: "abc".to_string(),
        };
        assert!(warning.to_string().contains("'abc'"));

        let rotation = ValueWarning::UnexpectedRotation { degrees: 45 };
        assert!(rotation.to_string().contains("45"));
    }

    // Tests validated values carry their warnings through map and log
    // Verified by dropping warnings in map
    #[test]
    fn test_validated_map_and_log() {
        let clean = Validated::clean(3);
        assert!(clean.is_clean());

        let warned = Validated {
            value: 2,
            warnings: vec![ValueWarning::UnexpectedRotation { degrees: 10 }],
        }
        .map(|value| value * 10);

        assert_eq!(warned.value, 20);
        assert_eq!(warned.warnings.len(), 1);
        assert_eq!(warned.log("test"), 20);
    }
}
