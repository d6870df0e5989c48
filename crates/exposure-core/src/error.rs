use chrono::{DateTime, Utc};
use thiserror::Error;

/// A candidate record is missing a required field or carries a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("store {store_id}: missing required field `{field}`")]
    MissingField {
        store_id: String,
        field: &'static str,
    },

    #[error("store {store_id}: invalid `{field}`: {reason}")]
    InvalidField {
        store_id: String,
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field, .. }
            | ValidationError::InvalidField { field, .. } => field,
        }
    }
}

/// The clock could not produce a trustworthy `now`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("clock unavailable: {0}")]
    Unavailable(String),

    #[error("clock went backwards: {current} is earlier than previous reading {previous}")]
    WentBackwards {
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read candidates file {path}: {source}")]
    CandidatesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse candidates file {path}: {reason}")]
    CandidatesFileParse { path: String, reason: String },
}
