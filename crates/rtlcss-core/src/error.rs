//! Error types for stylesheet parsing and override generation

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for override generation
#[derive(Debug, Error)]
pub enum RtlcssError {
    /// A closing brace appeared with no open block on the stack
    #[error("unbalanced '}}' at byte offset {offset}")]
    UnbalancedCloseBrace { offset: usize },

    /// Exclusion-list loading or parsing errors
    #[error("exclusion list error: {message}")]
    ExclusionsError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Exclusions,
    Io,
}

impl RtlcssError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RtlcssError::UnbalancedCloseBrace { .. } => ErrorKind::Parse,
            RtlcssError::ExclusionsError { .. } => ErrorKind::Exclusions,
            RtlcssError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Check if this error is recoverable (can continue processing other files)
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Parse | ErrorKind::Io)
    }

    /// Create an exclusion list error
    pub fn exclusions_error(message: impl Into<String>) -> Self {
        Self::ExclusionsError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for RtlcssError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let parse = RtlcssError::UnbalancedCloseBrace { offset: 3 };
        assert_eq!(parse.kind(), ErrorKind::Parse);
        assert!(parse.is_recoverable());

        let excl = RtlcssError::exclusions_error("bad line");
        assert_eq!(excl.kind(), ErrorKind::Exclusions);
        assert!(!excl.is_recoverable());

        let io = RtlcssError::io_error(
            "a.css",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(io.kind(), ErrorKind::Io);
        assert!(io.to_string().contains("a.css"));
    }
}
