//! MtLog Core
//!
//! Minimal file-based logger: configure a destination path and a table of
//! named severity levels, then append one timestamped line per call.
//!
//! ```rust,ignore
//! use mtlog_core::{LevelMap, Logger};
//!
//! let logger = Logger::with_path("app.log");
//! logger.log("info", ["service started"]);
//! logger.log("error", ["db", "connection refused"]);
//! // → [Tue, 26 Aug 2026 12:00:00 GMT] [error] :-> db : connection refused
//!
//! // Custom level table; the dispatchable names follow the table
//! let mut logger = Logger::with_levels("app.log", [(0, "quiet"), (1, "loud")].into_iter().collect());
//! logger.log("loud", ["hello"]);
//! ```
//!
//! There is no rotation, buffering, or multi-destination fan-out: each call
//! opens the destination in append mode, writes one line, and returns.

pub mod config;
pub mod error;
pub mod global;
pub mod levels;
pub mod logger;
pub mod sink;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, LoggerConfig};
pub use error::{LogError, LogResult};
pub use global::global;
pub use levels::LevelMap;
pub use logger::{Logger, DEFAULT_LOG_PATH};
pub use sink::{ErrorSink, NoOpSink, StderrSink};
