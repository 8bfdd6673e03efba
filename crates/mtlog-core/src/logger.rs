//! File-backed leveled logger
//!
//! A `Logger` holds a destination path and a level table, and appends one
//! formatted line per call:
//!
//! ```text
//! [Tue, 26 Aug 2026 12:00:00 GMT] [warn] :-> disk almost full
//! ```
//!
//! Level dispatch goes through [`Logger::log`] by name; the dispatchable
//! name set always equals the value set of the active [`LevelMap`].

use std::collections::HashMap;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::error::{LogError, LogResult};
use crate::levels::LevelMap;
use crate::sink::{ErrorSink, StderrSink};

/// Destination used when no path is given
pub const DEFAULT_LOG_PATH: &str = "default.log";

/// Separator between message parts in a single line
const PART_SEPARATOR: &str = " : ";

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// A logger that appends timestamped lines to a single file
///
/// Writes are synchronous: each call appends in issue order and returns
/// after the write completes. The fire-and-forget methods ([`record`],
/// [`log`]) hand failures to the configured [`ErrorSink`]; the `try_`
/// variants return them instead.
///
/// [`record`]: Logger::record
/// [`log`]: Logger::log
pub struct Logger {
    path: PathBuf,
    levels: LevelMap,
    by_name: HashMap<String, u32>,
    error_sink: Arc<dyn ErrorSink>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a logger writing to `"default.log"` with the six built-in levels
    pub fn new() -> Self {
        Self::with_path(DEFAULT_LOG_PATH)
    }

    /// Create a logger for a specific destination with the built-in levels
    ///
    /// An empty path falls back to `"default.log"`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::with_levels(path, LevelMap::default())
    }

    /// Create a logger with a custom level table
    pub fn with_levels(path: impl Into<PathBuf>, levels: LevelMap) -> Self {
        let path = path.into();
        let path = if path.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_LOG_PATH)
        } else {
            path
        };
        let by_name = derive_dispatch(&levels);
        Self {
            path,
            levels,
            by_name,
            error_sink: Arc::new(StderrSink::new()),
        }
    }

    /// Replace the error sink used by the fire-and-forget methods
    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.error_sink = sink;
        self
    }

    /// Destination file for all appends
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Redirect future appends to a new destination
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// The active level table
    pub fn levels(&self) -> &LevelMap {
        &self.levels
    }

    /// Replace the level table and rebuild the name dispatch table
    ///
    /// Both change in one step, so the dispatchable names always match the
    /// new table's value set; names only present in the old table stop
    /// dispatching.
    pub fn set_levels(&mut self, levels: LevelMap) {
        self.by_name = derive_dispatch(&levels);
        self.levels = levels;
    }

    /// Names currently dispatchable through [`Logger::log`], sorted
    pub fn level_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether a level name is dispatchable
    pub fn has_level(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Append one line at the level identified by `key`, fire-and-forget
    ///
    /// `parts` may hold any number of values; multiple values are joined
    /// with `" : "`. A key absent from the level table still appends a line
    /// with an empty level-name field. Write failures go to the error sink.
    pub fn record<I>(&self, key: u32, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if let Err(err) = self.try_record(key, parts) {
            self.error_sink.report(&err);
        }
    }

    /// Append one line at the level identified by `key`, returning the result
    pub fn try_record<I>(&self, key: u32, parts: I) -> LogResult<()>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let line = self.format_line(key, parts);
        self.append(&line)
    }

    /// Append one line at the level named `name`, fire-and-forget
    ///
    /// Unknown names are reported to the error sink as
    /// [`LogError::UnknownLevel`]; no line is appended for them.
    pub fn log<I>(&self, name: &str, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if let Err(err) = self.try_log(name, parts) {
            self.error_sink.report(&err);
        }
    }

    /// Append one line at the level named `name`, returning the result
    pub fn try_log<I>(&self, name: &str, parts: I) -> LogResult<()>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let key = *self
            .by_name
            .get(name)
            .ok_or_else(|| LogError::unknown_level(name))?;
        self.try_record(key, parts)
    }

    fn format_line<I>(&self, key: u32, parts: I) -> String
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let name = self.levels.name(key).unwrap_or("");
        let message = join_parts(parts);
        format!("[{}] [{}] :-> {}{}", gmt_timestamp(), name, message, EOL)
    }

    fn append(&self, line: &str) -> LogResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LogError::append(&self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| LogError::append(&self.path, e))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("levels", &self.levels)
            .finish_non_exhaustive()
    }
}

/// Build the name → key dispatch table from a level table
///
/// Entries are visited in ascending key order, so a duplicate name resolves
/// to the highest key carrying it (last-write-wins).
fn derive_dispatch(levels: &LevelMap) -> HashMap<String, u32> {
    levels
        .iter()
        .map(|(key, name)| (name.to_string(), key))
        .collect()
}

fn join_parts<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    parts
        .into_iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR)
}

/// Current time as an RFC-1123 style GMT timestamp
fn gmt_timestamp() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
