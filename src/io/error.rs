//! Error types and context management for sampling operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sampler operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Sampler parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input stream ran dry before every staircase cell was filled
    InputExhausted {
        /// Number of inputs the staircase needs
        required: usize,
        /// Number of inputs actually supplied
        supplied: usize,
    },

    /// Coordinates lie outside the staircase of the growth diagram
    OutOfStaircase {
        /// Row coordinate
        i: usize,
        /// Column coordinate
        j: usize,
        /// Order of the diamond
        n: usize,
    },

    /// Interior cell was read before the fill reached it
    UnfilledCell {
        /// Row coordinate
        i: usize,
        /// Column coordinate
        j: usize,
    },

    /// Interlacing, conservation or tiling consistency check failed
    ///
    /// Never expected in production use; indicates an algorithm bug or
    /// hand-made input that does not come from a growth diagram.
    InvariantViolation {
        /// Name of the check that failed
        check: &'static str,
        /// Description of the offending values
        detail: String,
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

    /// Failed to serialize samples for export
    Serialization {
        /// Destination of the export
        path: PathBuf,
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InputExhausted { required, supplied } => {
                write!(
                    f,
                    "Input exhausted: staircase needs {required} inputs but only {supplied} were supplied"
                )
            }
            Self::OutOfStaircase { i, j, n } => {
                write!(
                    f,
                    "Cell ({i}, {j}) is outside the staircase of a diamond of order {n}"
                )
            }
            Self::UnfilledCell { i, j } => {
                write!(f, "Cell ({i}, {j}) has not been filled yet")
            }
            Self::InvariantViolation { check, detail } => {
                write!(f, "Invariant violation in {check}: {detail}")
            }
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
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize samples for '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sampler results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Cell being computed when the error occurred
    pub cell: Option<(usize, usize)>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with sampler state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only invariant failures benefit from knowing where they happened
            if let AlgorithmError::InvariantViolation { detail, .. } = &mut error {
                if let Some((i, j)) = context.cell {
                    detail.push_str(&format!(" at cell ({i}, {j})"));
                }
                if let Some(operation) = context.operation {
                    detail.push_str(&format!(" during {operation}"));
                }
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            operation: Some(operation),
            ..Default::default()
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(check: &'static str, detail: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvariantViolation {
        check,
        detail: detail.to_string(),
    }
}
