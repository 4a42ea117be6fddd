//! Meeting requests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A request for a new meeting: how long it lasts and who should attend.
///
/// `attendees` are mandatory. `optional_attendees` are accommodated when
/// possible; an identifier present in both sets is treated as mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct MeetingRequest {
    attendees: BTreeSet<String>,
    optional_attendees: BTreeSet<String>,
    duration: u32,
}

#[derive(Deserialize)]
struct RawRequest {
    #[serde(default)]
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
    duration: u32,
}

impl TryFrom<RawRequest> for MeetingRequest {
    type Error = ScheduleError;

    fn try_from(raw: RawRequest) -> Result<Self> {
        Self::new(raw.attendees, raw.optional_attendees, raw.duration)
    }
}

impl MeetingRequest {
    /// Create a request.
    ///
    /// Durations longer than the day are accepted; they simply cannot be
    /// satisfied and every search returns no windows.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidDuration`] for a zero duration and
    /// [`ScheduleError::EmptyAttendee`] for an empty identifier.
    pub fn new<M, O, S, T>(attendees: M, optional_attendees: O, duration: u32) -> Result<Self>
    where
        M: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        if duration == 0 {
            return Err(ScheduleError::InvalidDuration(duration));
        }
        let attendees = collect_attendees(attendees)?;
        let optional_attendees = collect_attendees(optional_attendees)?;
        Ok(Self {
            attendees,
            optional_attendees,
            duration,
        })
    }

    /// Return a copy of this request with one more optional attendee.
    ///
    /// # Errors
    /// Returns [`ScheduleError::EmptyAttendee`] for an empty identifier.
    pub fn with_optional_attendee(mut self, attendee: impl Into<String>) -> Result<Self> {
        let attendee = attendee.into();
        if attendee.is_empty() {
            return Err(ScheduleError::EmptyAttendee);
        }
        self.optional_attendees.insert(attendee);
        Ok(self)
    }

    /// Mandatory attendees.
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    /// Meeting length in minutes.
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// Mandatory and optional attendees together.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }
}

fn collect_attendees<I, S>(attendees: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    attendees
        .into_iter()
        .map(|a| {
            let a: String = a.into();
            if a.is_empty() {
                Err(ScheduleError::EmptyAttendee)
            } else {
                Ok(a)
            }
        })
        .collect()
}
