use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Diff error: {0}")]
    Diff(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::Manifest(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a diff error with context
    pub fn diff(msg: impl Into<String>) -> Self {
        BumpError::Diff(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BumpError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(BumpError::version("test").to_string().contains("Version"));
        assert!(BumpError::manifest("test").to_string().contains("Manifest"));
        assert!(BumpError::diff("test").to_string().contains("Diff"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::config("x"), "Configuration error"),
            (BumpError::manifest("x"), "Manifest error"),
            (BumpError::version("x"), "Version parsing error"),
            (BumpError::diff("x"), "Diff error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            BumpError::config(""),
            BumpError::manifest(""),
            BumpError::version(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }
}
