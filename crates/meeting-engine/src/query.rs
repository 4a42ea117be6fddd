//! Top-level orchestration of the meeting search.
//!
//! Two terminal steps, no retries: look for windows that suit every mandatory
//! and optional attendee, and only if there are none fall back to the
//! best-effort search over optional attendees.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::event::Event;
use crate::finder::find_free_windows;
use crate::optimizer::optimize_optional_attendees;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// Which search produced the windows of a [`QueryOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The windows work for every mandatory and optional attendee.
    AllAttendees,
    /// The best-effort fallback ran; only `accommodated` optional attendees fit.
    BestEffort,
}

/// Windows found for a request, along with how they were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    pub kind: MatchKind,
    /// Optional attendees the windows accommodate.
    pub accommodated: BTreeSet<String>,
    /// Sorted, non-overlapping meeting windows.
    pub windows: Vec<TimeRange>,
}

/// Run the full search and report which attendees the windows accommodate.
pub fn query_detailed(events: &[Event], request: &MeetingRequest) -> QueryOutcome {
    let windows = find_free_windows(events, &request.all_attendees(), request.duration());
    if !windows.is_empty() || request.optional_attendees().is_empty() {
        return QueryOutcome {
            kind: MatchKind::AllAttendees,
            accommodated: request
                .optional_attendees()
                .difference(request.attendees())
                .cloned()
                .collect(),
            windows,
        };
    }

    debug!(
        optional = request.optional_attendees().len(),
        "no window suits every attendee, falling back to best effort"
    );
    let plan = optimize_optional_attendees(events, request);
    QueryOutcome {
        kind: MatchKind::BestEffort,
        accommodated: plan.accommodated,
        windows: plan.windows,
    }
}

/// Every window in which the requested meeting could be held.
///
/// Windows work for all mandatory attendees, and for all optional attendees
/// when that is possible; otherwise for the largest subset of optional
/// attendees that can meet together.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_detailed(events, request).windows
}
