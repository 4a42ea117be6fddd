//! Calendar events tagged with the attendees they occupy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::time_range::TimeRange;

/// An event already on the calendar.
///
/// Attendees are kept in a sorted set so iteration order is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    title: String,
    #[serde(flatten)]
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    /// Create an event occupying `when` for each of `attendees`.
    ///
    /// # Errors
    /// Returns [`ScheduleError::EmptyAttendee`] if any identifier is empty.
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attendees: BTreeSet<String> = attendees.into_iter().map(Into::into).collect();
        if attendees.iter().any(String::is_empty) {
            return Err(ScheduleError::EmptyAttendee);
        }
        Ok(Self {
            title: title.into(),
            when,
            attendees,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// True when at least one of this event's attendees is in `attendees`.
    pub fn involves_any(&self, attendees: &BTreeSet<String>) -> bool {
        // Walk the smaller set and probe the larger one.
        if self.attendees.len() <= attendees.len() {
            self.attendees.iter().any(|a| attendees.contains(a))
        } else {
            attendees.iter().any(|a| self.attendees.contains(a))
        }
    }
}
