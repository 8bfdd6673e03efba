//! Logger error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while recording a log line
#[derive(Error, Debug)]
pub enum LogError {
    /// Opening or appending to the destination file failed
    #[error("failed to append to log file {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A level name was used that is not in the active level table
    #[error("unknown log level '{name}'")]
    UnknownLevel { name: String },
}

impl LogError {
    /// Create an append error for a destination path
    pub fn append(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Append {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown-level error
    pub fn unknown_level(name: impl Into<String>) -> Self {
        Self::UnknownLevel { name: name.into() }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_error_message() {
        let err = LogError::append(
            "/no/such/dir/out.log",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir/out.log"));
        assert!(msg.contains("failed to append"));
    }

    #[test]
    fn test_unknown_level_message() {
        let err = LogError::unknown_level("verbose");
        assert_eq!(err.to_string(), "unknown log level 'verbose'");
    }
}
