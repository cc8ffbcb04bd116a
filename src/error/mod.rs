//! Error handling for the audit engine.
//!
//! Rule violations are not errors: they are the findings a pass produces.
//! This type only covers what stops a pass from running or reporting.

use std::io;
use std::path::PathBuf;

/// Specialized error type for audit passes
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// The report sink could not be opened or appended to
    #[error("Cannot write report to {target}: {source}")]
    Sink {
        /// Description of the sink (a path, `stdout`, ...)
        target: String,
        #[source]
        source: io::Error,
    },

    /// A record or configuration file could not be read
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record or configuration document is not valid JSON for its shape
    #[error("Invalid document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration values were rejected
    #[error("Configuration error: {0}")]
    Config(String),

    /// The same id appeared twice while building a record store
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}

impl AuditError {
    /// Wrap an IO failure on the report sink
    pub fn sink(target: impl Into<String>, source: io::Error) -> Self {
        Self::Sink {
            target: target.into(),
            source,
        }
    }

    /// Whether this error happened while emitting report text
    #[must_use]
    pub const fn is_sink_failure(&self) -> bool {
        matches!(self, Self::Sink { .. })
    }
}

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;
