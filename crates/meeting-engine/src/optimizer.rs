//! Best-effort search over optional attendees.
//!
//! Used when no window accommodates every mandatory and optional attendee.
//! Rather than trying each of the `2^k` subsets of optional attendees, the
//! optimizer slides a candidate meeting start minute by minute across every
//! window that works for the mandatory attendees and counts, at each start,
//! how many optional attendees are free for the whole meeting. Each optional
//! attendee's merged busy ranges are walked with a pointer that only moves
//! forward, so the full pass costs `O(events + optional × day length)`.
//!
//! The largest free subset seen (the first one on ties) is then re-queried
//! through [`find_free_windows`] together with the mandatory attendees, which
//! yields every window for that combination rather than just the one the
//! sweep stumbled on.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::event::Event;
use crate::finder::{find_free_windows, is_satisfiable, merge_busy_ranges};
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// The outcome of the best-effort search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BestEffortPlan {
    /// Optional attendees the returned windows accommodate.
    pub accommodated: BTreeSet<String>,
    /// Windows that work for every mandatory attendee and for `accommodated`.
    pub windows: Vec<TimeRange>,
}

/// Merged busy ranges of one optional attendee plus the sweep pointer into them.
struct BusyCursor<'a> {
    attendee: &'a str,
    busy: Vec<TimeRange>,
    next: usize,
}

impl BusyCursor<'_> {
    /// True when the attendee has no busy range overlapping
    /// `[start, start + duration)`.
    ///
    /// `start` must never decrease between calls. Merged ranges have strictly
    /// increasing ends, so ranges that ended at or before `start` can be
    /// skipped for good.
    fn is_free(&mut self, start: u32, duration: u32) -> bool {
        while self
            .busy
            .get(self.next)
            .is_some_and(|range| range.end() <= start)
        {
            self.next += 1;
        }
        match self.busy.get(self.next) {
            Some(range) => range.start() >= start + duration,
            None => true,
        }
    }
}

/// Build one cursor per optional attendee that is not also mandatory.
fn busy_cursors<'a>(events: &[Event], request: &'a MeetingRequest) -> Vec<BusyCursor<'a>> {
    let mut by_attendee: BTreeMap<&'a str, Vec<TimeRange>> = request
        .optional_attendees()
        .iter()
        .filter(|a| !request.attendees().contains(*a))
        .map(|a| (a.as_str(), Vec::new()))
        .collect();

    for event in events {
        for attendee in event.attendees() {
            if let Some(busy) = by_attendee.get_mut(attendee.as_str()) {
                busy.push(event.when());
            }
        }
    }

    by_attendee
        .into_iter()
        .map(|(attendee, busy)| BusyCursor {
            attendee,
            busy: merge_busy_ranges(busy),
            next: 0,
        })
        .collect()
}

/// Find the windows that work for every mandatory attendee and for the largest
/// achievable subset of optional attendees.
///
/// When several subsets tie for the largest size, the first one reached by the
/// sweep is used. If the request has no optional attendees the mandatory-only
/// windows are returned unchanged. If no optional attendee can be accommodated
/// and there are no mandatory attendees either, there is nobody to meet and the
/// plan is empty.
pub fn optimize_optional_attendees(events: &[Event], request: &MeetingRequest) -> BestEffortPlan {
    let duration = request.duration();
    let mandatory = request.attendees();

    let mandatory_windows = find_free_windows(events, mandatory, duration);
    if request.optional_attendees().is_empty() || !is_satisfiable(duration) {
        return BestEffortPlan {
            accommodated: BTreeSet::new(),
            windows: mandatory_windows,
        };
    }

    let mut cursors = busy_cursors(events, request);
    let mut best: Option<BTreeSet<&str>> = None;
    let mut best_count = 0usize;

    'sweep: for window in &mandatory_windows {
        trace!(%window, "scanning mandatory window");
        for start in window.start()..=window.end() - duration {
            let free: BTreeSet<&str> = cursors
                .iter_mut()
                .filter_map(|c| c.is_free(start, duration).then_some(c.attendee))
                .collect();

            if best.is_none() || free.len() > best_count {
                best_count = free.len();
                best = Some(free);
                if best_count == cursors.len() {
                    break 'sweep;
                }
            }
        }
    }

    let Some(best) = best else {
        debug!("no window works for the mandatory attendees");
        return BestEffortPlan::default();
    };

    if best.is_empty() && mandatory.is_empty() {
        debug!("no optional attendee can be accommodated and nobody is mandatory");
        return BestEffortPlan::default();
    }

    let accommodated: BTreeSet<String> = best.into_iter().map(str::to_owned).collect();
    debug!(
        accommodated = accommodated.len(),
        optional = cursors.len(),
        "best-effort optional subset chosen"
    );

    let attendees: BTreeSet<String> = mandatory.union(&accommodated).cloned().collect();
    BestEffortPlan {
        windows: find_free_windows(events, &attendees, duration),
        accommodated,
    }
}

/// Windows for the mandatory attendees plus the largest achievable subset of
/// optional attendees.
///
/// See [`optimize_optional_attendees`] for the chosen subset itself.
pub fn find_best_effort_windows(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    optimize_optional_attendees(events, request).windows
}
