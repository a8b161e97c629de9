//! Error types for the file replacement library.
//!
//! This module provides a comprehensive error handling strategy with proper
//! error categorization and context preservation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for replacement operations.
pub type ReplacerResult<T> = Result<T, ReplacerError>;

/// Comprehensive error type for all replacement operations.
///
/// This enum categorizes errors by their source and provides rich context
/// for debugging and error recovery.
#[derive(Debug)]
pub enum ReplacerError {
    /// Source path did not exist at the moment it was configured
    NotFound { path: PathBuf },

    /// Invalid configuration or parameters
    InvalidInput { parameter: String, reason: String },

    /// Error occurred while reading or writing files
    Io { path: PathBuf, source: io::Error },
}

impl ReplacerError {
    /// Builds an `InvalidInput` error from string-ish parts.
    pub fn invalid_input(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Builds an `Io` error tied to a specific path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ReplacerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "File not found: {}", path.display())
            }
            Self::InvalidInput { parameter, reason } => {
                write!(f, "Invalid input for '{}': {}", parameter, reason)
            }
            Self::Io { path, source } => {
                write!(f, "IO error for path '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ReplacerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ReplacerError::invalid_input("secret_length", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'secret_length': must be greater than zero"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = ReplacerError::NotFound {
            path: PathBuf::from("/no/such/file.txt"),
        };
        assert!(err.to_string().contains("/no/such/file.txt"));
    }

    #[test]
    fn test_io_source_preserved() {
        let err = ReplacerError::io(
            "/tmp/out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
