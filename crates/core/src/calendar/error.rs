use thiserror::Error;

/// Reasons an event form submission is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event name cannot be empty")]
    EmptyName,
    #[error("Start time is required for timed events")]
    MissingStartTime,
    #[error("End time is required for timed events")]
    MissingEndTime,
    #[error("Invalid {field}: {value} (expected HH:MM)")]
    InvalidTime { field: &'static str, value: String },
    #[error("Unknown color: {0}")]
    UnknownColor(String),
}

/// Errors converting a stored event object into an [`Event`](super::Event).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Event id is missing")]
    MissingId,
    #[error("Timed event is missing {0}")]
    MissingTime(&'static str),
    #[error("Timed event has invalid {field}: {value}")]
    InvalidTime { field: &'static str, value: String },
}
