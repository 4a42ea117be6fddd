//! Error types for meeting-engine value construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid duration: {0} minutes (must be greater than zero)")]
    InvalidDuration(u32),

    #[error("Invalid time range: start {start}, end {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Attendee identifier must not be empty")]
    EmptyAttendee,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
