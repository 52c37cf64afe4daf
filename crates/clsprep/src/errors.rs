//! # Error Types

/// Errors from clsprep operations.
#[derive(Debug, thiserror::Error)]
pub enum ClsprepError {
    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A corpus line did not match ``{TEXT}\t{LABEL}``.
    #[error("{path}:{line}: {message}")]
    Format {
        /// The corpus path.
        path: String,

        /// The 1-based line number.
        line: usize,

        /// What was wrong with the line.
        message: String,
    },

    /// A corpus line did not match ``{TEXT}\t{LABEL}``; location not yet known.
    #[error("malformed line: {0}")]
    MalformedLine(String),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid configuration.
    #[error("invalid config: {0}")]
    Config(String),

    /// A batch iterator was built over no records.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Batch size must be positive.
    #[error("batch size must be > 0")]
    InvalidBatchSize,

    /// Records can not be stacked into a batch.
    #[error("shape mismatch: {0}")]
    Shape(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

impl ClsprepError {
    /// Build a [`ClsprepError::Format`] error.
    pub fn format<P: AsRef<str>, M: Into<String>>(
        path: P,
        line: usize,
        message: M,
    ) -> Self {
        Self::Format {
            path: path.as_ref().to_string(),
            line,
            message: message.into(),
        }
    }

    /// Attach a corpus location to a [`ClsprepError::MalformedLine`].
    ///
    /// Other errors pass through unchanged.
    pub fn at_line<P: AsRef<str>>(
        self,
        path: P,
        line: usize,
    ) -> Self {
        match self {
            Self::MalformedLine(message) => Self::format(path, line, message),
            err => err,
        }
    }
}

/// Result type for clsprep operations.
pub type Result<T> = core::result::Result<T, ClsprepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        let err = ClsprepError::format("train.txt", 7, "missing tab separator");
        assert_eq!(err.to_string(), "train.txt:7: missing tab separator");
    }

    #[test]
    fn test_at_line() {
        let err = ClsprepError::MalformedLine("missing tab separator".to_string()).at_line("a.txt", 2);
        assert!(matches!(err, ClsprepError::Format { line: 2, .. }));

        let err = ClsprepError::EmptyDataset.at_line("a.txt", 2);
        assert!(matches!(err, ClsprepError::EmptyDataset));
    }

    #[test]
    fn test_io_from() {
        let err: ClsprepError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(matches!(err, ClsprepError::Io(_)));
    }
}
