use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Git is unavailable: {message}")]
    GitUnavailable { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("File operation failed: {message}")]
    FileOperation { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl SweepError {
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn git_unavailable(message: impl Into<String>) -> Self {
        Self::GitUnavailable {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn file_operation(message: impl Into<String>) -> Self {
        Self::FileOperation {
            message: message.into(),
        }
    }

    /// Errors that must terminate the run instead of degrading a single
    /// classification step. Everything else is recoverable in place.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, Self::GitUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SweepError::git_operation("branch -d refused");
        assert_eq!(err.to_string(), "Git operation failed: branch -d refused");

        let err = SweepError::git_unavailable("No such file or directory");
        assert_eq!(
            err.to_string(),
            "Git is unavailable: No such file or directory"
        );

        let err = SweepError::invalid_args("unknown flag");
        assert_eq!(err.to_string(), "Invalid arguments: unknown flag");

        let err = SweepError::config_error("bad json");
        assert_eq!(err.to_string(), "Configuration error: bad json");

        let err = SweepError::file_operation("cannot write");
        assert_eq!(err.to_string(), "File operation failed: cannot write");
    }

    #[test]
    fn test_unrecoverable_classification() {
        assert!(SweepError::git_unavailable("gone").is_unrecoverable());
        assert!(!SweepError::git_operation("rejected").is_unrecoverable());
        assert!(!SweepError::config_error("bad json").is_unrecoverable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SweepError = io_err.into();
        assert!(err.to_string().contains("missing"));
    }
}
