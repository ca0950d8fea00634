//! Error types for schedule operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::activity::Activity;

/// Errors that can occur while editing, querying or persisting a schedule.
///
/// Every variant is recoverable: callers report it and carry on with the
/// schedule they already hold.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("'{}' conflicts with existing activity '{}'", candidate.name(), existing.name())]
    Conflict {
        candidate: Box<Activity>,
        existing: Box<Activity>,
    },

    #[error("Invalid day {0}: must be between 1 (Monday) and 7 (Sunday)")]
    InvalidDay(u8),

    #[error("No activity named '{0}'")]
    NotFound(String),

    #[error("Could not access schedule file {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ScheduleError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScheduleError::Persistence {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ScheduleError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
