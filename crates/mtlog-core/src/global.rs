//! Process-wide default logger
//!
//! A pre-wired shared instance bound to `"main.log"`, with one free
//! function per built-in level. Purely a convenience surface; embedders
//! that need a custom path or level table construct their own [`Logger`].

use std::fmt;

use once_cell::sync::Lazy;

use crate::logger::Logger;

/// Destination of the shared instance
pub const GLOBAL_LOG_PATH: &str = "main.log";

static GLOBAL: Lazy<Logger> = Lazy::new(|| Logger::with_path(GLOBAL_LOG_PATH));

/// The shared process-wide logger
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Log message parts at the `debug` level on the shared logger
pub fn debug<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    global().log("debug", parts)
}

/// Log message parts at the `log` level on the shared logger
pub fn log<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    global().log("log", parts)
}

/// Log message parts at the `info` level on the shared logger
pub fn info<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    global().log("info", parts)
}

/// Log message parts at the `warn` level on the shared logger
pub fn warn<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    global().log("warn", parts)
}

/// Log message parts at the `error` level on the shared logger
pub fn error<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    global().log("error", parts)
}

/// Log message parts at the `critical` level on the shared logger
pub fn critical<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    global().log("critical", parts)
}

/// Convenience macros formatting one message onto the shared logger
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::global::debug([format!($($arg)*)])
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::global::info([format!($($arg)*)])
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::global::warn([format!($($arg)*)])
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::global::error([format!($($arg)*)])
    };
}

#[macro_export]
macro_rules! critical_log {
    ($($arg:tt)*) => {
        $crate::global::critical([format!($($arg)*)])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_global_binding() {
        let logger = global();
        assert_eq!(logger.path(), Path::new("main.log"));
        assert_eq!(logger.level_names().len(), 6);
        assert!(logger.has_level("critical"));
    }

    #[test]
    fn test_global_is_shared() {
        let a = global() as *const Logger;
        let b = global() as *const Logger;
        assert_eq!(a, b);
    }
}
