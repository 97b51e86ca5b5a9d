//! Error types, value warnings and context management for analysis operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Reason a grid has no usable shape for the requested metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeIssue {
    /// The grid holds no values
    Empty,
    /// No width was given and the length is not a perfect square
    WidthUnspecified,
    /// The length is prime, so no rectangular interpretation exists
    NoMatrixSize,
    /// A square-only operation received a non-square grid
    NotSquare,
    /// The declared width does not divide the length
    Indivisible {
        /// Declared column count
        width: usize,
    },
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid is empty"),
            Self::WidthUnspecified => {
                write!(f, "width unspecified and length is not a perfect square")
            }
            Self::NoMatrixSize => write!(f, "length has no possible matrix size"),
            Self::NotSquare => write!(f, "grid is not square"),
            Self::Indivisible { width } => {
                write!(f, "width {width} does not divide the grid length")
            }
        }
    }
}

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Grid length has no valid interpretation for the operation
    Shape {
        /// Number of values in the offending grid
        length: usize,
        /// What is wrong with the shape
        issue: ShapeIssue,
    },

    /// Two sequences that must be compared elementwise differ in length
    LengthMismatch {
        /// Length of the reference sequence
        expected: usize,
        /// Length of the compared sequence
        found: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Session file content could not be interpreted
    InvalidSessionData {
        /// Source file, when known
        path: Option<PathBuf>,
        /// One-based line number of the offending line
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Report could not be serialized
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl AnalysisError {
    /// Create a shape error for a grid of the given length
    pub const fn shape(length: usize, issue: ShapeIssue) -> Self {
        Self::Shape { length, issue }
    }

    /// Whether the error means "metric not applicable to this input"
    ///
    /// These are the cases a report renders as the `-1` sentinel.
    pub const fn is_undefined_score(&self) -> bool {
        matches!(self, Self::Shape { .. } | Self::LengthMismatch { .. })
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { length, issue } => {
                write!(f, "Grid of length {length} has no usable shape: {issue}")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "Sequence lengths must match (expected {expected}, found {found})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSessionData { path, line, reason } => match path {
                Some(path) => write!(
                    f,
                    "Invalid session data in '{}' at line {line}: {reason}",
                    path.display()
                ),
                None => write!(f, "Invalid session data at line {line}: {reason}"),
            },
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize report: {source}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Attaches file information to errors raised while handling a file
pub trait WithPath<T> {
    /// Record the path and operation on file system and session errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<AnalysisError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors tied to a file benefit from the path
            match &mut error {
                AnalysisError::FileSystem {
                    path: error_path,
                    operation: error_operation,
                    ..
                } => {
                    *error_path = path.to_path_buf();
                    *error_operation = operation;
                }
                AnalysisError::InvalidSessionData {
                    path: error_path, ..
                } => {
                    *error_path = Some(path.to_path_buf());
                }
                _ => {}
            }
            error
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a session data error for a one-based line number
pub fn invalid_session(line: usize, reason: &impl ToString) -> AnalysisError {
    AnalysisError::InvalidSessionData {
        path: None,
        line,
        reason: reason.to_string(),
    }
}

/// Data-quality problem that was repaired by substituting a safe default
#[derive(Debug, Clone, PartialEq)]
pub enum ValueWarning {
    /// A token that should be a number could not be parsed (replaced by 0)
    NonNumeric {
        /// Position of the value in its sequence
        index: usize,
        /// The offending token
        token: String,
    },
    /// An orientation that is not a multiple of 90° (replaced by 0)
    UnexpectedOrientation {
        /// Position of the value in the grid
        index: usize,
        /// The offending value
        value: i32,
    },
    /// A rotation amount that is not a multiple of 90° (treated as 0)
    UnexpectedRotation {
        /// The offending rotation in degrees
        degrees: i32,
    },
    /// A probability that is negative or not finite (skipped)
    InvalidProbability {
        /// Position of the value in the distribution
        index: usize,
        /// The offending value
        value: f64,
    },
}

impl fmt::Display for ValueWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNumeric { index, token } => {
                write!(f, "value {index} ('{token}') is not a number, using 0")
            }
            Self::UnexpectedOrientation { index, value } => {
                write!(f, "value {index} ({value}) is not an orientation, using 0")
            }
            Self::UnexpectedRotation { degrees } => {
                write!(f, "{degrees} is not a valid rotation, using 0")
            }
            Self::InvalidProbability { index, value } => {
                write!(f, "probability {index} ({value}) is not valid, skipping")
            }
        }
    }
}

/// A value after validation together with the repairs applied to it
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    /// The repaired value
    pub value: T,
    /// Every substitution made while validating
    pub warnings: Vec<ValueWarning>,
}

impl<T> Validated<T> {
    /// Wrap a value that needed no repairs
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Whether validation found nothing to repair
    pub const fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Emit every warning through `tracing` and return the repaired value
    pub fn log(self, operation: &str) -> T {
        for warning in &self.warnings {
            tracing::warn!(operation = operation, "{warning}");
        }
        self.value
    }

    /// Transform the value while keeping the warnings
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U> {
        Validated {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// Convert a metric result into the numeric form used in reports
///
/// Undefined metrics become `-1`; the caller must not treat that as a score.
/// Any other failure is logged before it is reported the same way.
pub fn score_or_sentinel(result: &Result<f64>) -> f64 {
    match result {
        Ok(score) => *score,
        Err(error) => {
            if !error.is_undefined_score() {
                tracing::warn!("{error}");
            }
            crate::io::configuration::UNDEFINED_SCORE
        }
    }
}
