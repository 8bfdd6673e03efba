//! Error sink abstraction for fire-and-forget writes
//!
//! The fire-and-forget surface (`record`, `log`, the global free functions)
//! never returns errors to the caller; write failures are handed to the
//! logger's `ErrorSink` instead.

use crate::error::LogError;

/// Receiver for failures from fire-and-forget log calls
pub trait ErrorSink: Send + Sync {
    /// Report a failure that could not be returned to the caller
    fn report(&self, err: &LogError);
}

/// Default sink: prints the failure to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    /// Create a new stderr sink
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for StderrSink {
    fn report(&self, err: &LogError) {
        eprintln!("mtlog: {}", err);
    }
}

/// A sink that discards failures
///
/// Useful for testing or when lost lines are acceptable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for NoOpSink {
    fn report(&self, _err: &LogError) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinks_do_not_panic() {
        let err = LogError::unknown_level("nope");
        StderrSink::new().report(&err);
        NoOpSink::new().report(&err);
    }
}
