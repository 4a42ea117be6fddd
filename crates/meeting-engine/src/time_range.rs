//! Minute-of-day intervals.
//!
//! A [`TimeRange`] is a half-open interval `[start, end)` of minutes inside a
//! single day. The valid minute domain is `[START_OF_DAY, WHOLE_DAY)`, so the
//! last instant a meeting may occupy is `END_OF_DAY`. A window that runs up to
//! and including that instant is stored with an exclusive end of `WHOLE_DAY`
//! and reports [`TimeRange::ends_at_end_of_day`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last valid minute of the day (23:59).
pub const END_OF_DAY: u32 = WHOLE_DAY - 1;

/// Length of the day in minutes.
pub const WHOLE_DAY: u32 = 24 * 60;

/// An immutable interval of minutes within the day.
///
/// Ordered by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = ScheduleError;

    fn try_from(raw: RawRange) -> Result<Self> {
        Self::from_start_end(raw.start, raw.end, false)
    }
}

impl TimeRange {
    /// The whole day, `[START_OF_DAY, WHOLE_DAY)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: WHOLE_DAY,
    };

    /// Build a range from its start and end.
    ///
    /// When `inclusive` is true, `end` is the last minute covered by the range
    /// (for example [`END_OF_DAY`]), otherwise it is the first minute after it.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidRange`] unless
    /// `start < exclusive end <= WHOLE_DAY`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let exclusive_end = if inclusive { end.saturating_add(1) } else { end };
        if start >= exclusive_end || exclusive_end > WHOLE_DAY {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end: exclusive_end,
        })
    }

    /// Build a range starting at `start` and lasting `duration` minutes.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidRange`] for a zero duration or a range
    /// that runs past the end of the day.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::from_start_end(start, start.saturating_add(duration), false)
    }

    /// Unchecked constructor for callers that already hold `start < end <= WHOLE_DAY`.
    pub(crate) const fn span(start: u32, end: u32) -> Self {
        debug_assert!(start < end && end <= WHOLE_DAY);
        Self { start, end }
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end minute.
    pub const fn end(&self) -> u32 {
        self.end
    }

    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// True when the range covers the last valid minute of the day.
    pub const fn ends_at_end_of_day(&self) -> bool {
        self.end == WHOLE_DAY
    }

    /// Two ranges overlap iff each starts before the other ends.
    ///
    /// Adjacent ranges, where one ends exactly when the other starts, do not
    /// overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `other` lies entirely within this range.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub const fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:02}:{:02}, {:02}:{:02})",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
