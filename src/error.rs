//! Error types for the I/O collaborators around the solvers.
//!
//! The solvers themselves never fail: degenerate input falls back to a
//! default result. Only the member store, venue sources and routing
//! providers can produce errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the member store and venue sources
#[derive(Debug, Error)]
pub enum MeetingPointError {
    /// Reading or writing a data file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file does not contain the expected JSON.
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No member with this name is registered.
    #[error("Unknown member: {0}")]
    UnknownMember(String),

    /// A member record is missing a required field.
    #[error("Invalid member: {0}")]
    InvalidMember(String),
}

impl MeetingPointError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for store and venue operations
pub type Result<T> = std::result::Result<T, MeetingPointError>;

/// Failures of an external routing provider
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("routing request timed out")]
    Timeout,

    #[error("routing quota exceeded")]
    QuotaExceeded,

    #[error("no route between the two locations")]
    NoRoute,

    #[error("routing provider error: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = MeetingPointError::io(
            "data/friends.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on data/friends.json: denied");
    }

    #[test]
    fn test_unknown_member_message() {
        let err = MeetingPointError::UnknownMember("Alice".into());
        assert_eq!(err.to_string(), "Unknown member: Alice");
    }
}
