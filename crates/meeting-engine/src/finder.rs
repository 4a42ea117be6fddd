//! Free windows for an exact attendee set.
//!
//! Keeps the busy ranges of every event that involves at least one requested
//! attendee, sorts them by start, and sweeps a cursor across the day. Each gap
//! between the cursor and the next busy range that is long enough for the
//! meeting becomes a window. Advancing the cursor to `max(cursor, busy.end)`
//! folds overlapping and nested busy ranges without a separate merge pass.

use std::collections::BTreeSet;

use tracing::debug;

use crate::event::Event;
use crate::time_range::{TimeRange, START_OF_DAY, WHOLE_DAY};

/// True when a meeting of `duration` minutes could fit in the day at all.
pub(crate) const fn is_satisfiable(duration: u32) -> bool {
    duration > 0 && duration <= WHOLE_DAY
}

/// Busy ranges of the events that involve any of `attendees`, sorted by start.
fn relevant_busy_ranges(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    let mut busy: Vec<TimeRange> = events
        .iter()
        .filter(|e| e.involves_any(attendees))
        .map(Event::when)
        .collect();
    busy.sort();
    busy
}

/// Merge overlapping or adjacent ranges.
///
/// Returns a sorted, non-overlapping list; ends are strictly increasing.
pub(crate) fn merge_busy_ranges(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    ranges.sort();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                // Overlapping or adjacent -- extend the current range.
                *last = TimeRange::span(last.start(), last.end().max(range.end()));
                continue;
            }
        }
        merged.push(range);
    }
    merged
}

/// Find every window of at least `duration` minutes during which none of
/// `attendees` is busy.
///
/// An empty attendee set places no constraints, so the whole day is returned.
/// Windows are sorted by start and never overlap or touch. A `duration` of 0 or
/// longer than the day yields no windows.
pub fn find_free_windows(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: u32,
) -> Vec<TimeRange> {
    if !is_satisfiable(duration) {
        debug!(duration, "unsatisfiable meeting duration, no windows");
        return Vec::new();
    }

    let busy = relevant_busy_ranges(events, attendees);

    let mut windows = Vec::new();
    let mut cursor = START_OF_DAY;

    for range in &busy {
        if range.start().saturating_sub(cursor) >= duration {
            windows.push(TimeRange::span(cursor, range.start()));
        }
        cursor = cursor.max(range.end());
    }

    // Trailing window after the last busy range runs to the end of the day.
    if WHOLE_DAY - cursor >= duration {
        windows.push(TimeRange::span(cursor, WHOLE_DAY));
    }

    windows
}

/// Find the earliest free window of at least `duration` minutes.
///
/// Delegates to [`find_free_windows`] and returns its first window.
pub fn find_first_free_window(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: u32,
) -> Option<TimeRange> {
    find_free_windows(events, attendees, duration)
        .into_iter()
        .next()
}
