//! Explain which events block a proposed meeting window.
//!
//! Adjacent events, where one ends exactly when the window starts or the
//! window ends exactly when the event starts, are NOT conflicts.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::event::Event;
use crate::time_range::TimeRange;

/// An event that overlaps a proposed window for some of the requested attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub event: Event,
    /// Requested attendees who are in `event`.
    pub busy_attendees: BTreeSet<String>,
    pub overlap_minutes: u32,
}

/// Find every event that overlaps `window` and shares an attendee with
/// `attendees`, in event start order.
///
/// The overlap is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts(
    events: &[Event],
    window: TimeRange,
    attendees: &BTreeSet<String>,
) -> Vec<Conflict> {
    let mut conflicts: Vec<Conflict> = events
        .iter()
        .filter(|event| event.when().overlaps(&window))
        .filter_map(|event| {
            let busy_attendees: BTreeSet<String> = event
                .attendees()
                .intersection(attendees)
                .cloned()
                .collect();
            if busy_attendees.is_empty() {
                return None;
            }
            let when = event.when();
            let overlap_minutes = when.end().min(window.end()) - when.start().max(window.start());
            Some(Conflict {
                event: event.clone(),
                busy_attendees,
                overlap_minutes,
            })
        })
        .collect();

    conflicts.sort_by_key(|c| c.event.when());
    conflicts
}
