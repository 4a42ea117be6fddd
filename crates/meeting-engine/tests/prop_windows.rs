//! Property-based tests for the meeting search using proptest.
//!
//! These tests verify invariants that should hold for *any* calendar, not just
//! the fixtures in the other test files. The best-effort search is checked
//! against a brute-force walk over every subset of optional attendees, which is
//! only affordable because the generated attendee pool is small.

use std::collections::BTreeSet;

use meeting_engine::{
    find_free_windows, optimize_optional_attendees, query, Event, MeetingRequest, TimeRange,
    WHOLE_DAY,
};
use proptest::prelude::*;

const POOL: [&str; 5] = ["A", "B", "C", "D", "E"];

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_event() -> impl Strategy<Value = Event> {
    (
        0u32..WHOLE_DAY,
        1u32..=360,
        prop::sample::subsequence(POOL.to_vec(), 1..=3),
    )
        .prop_map(|(start, len, attendees)| {
            let end = (start + len).min(WHOLE_DAY);
            Event::new(
                "generated",
                TimeRange::from_start_end(start, end, false).unwrap(),
                attendees,
            )
            .unwrap()
        })
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..12)
}

fn arb_attendees() -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(POOL.to_vec(), 0..=POOL.len())
        .prop_map(|names| names.into_iter().map(String::from).collect())
}

fn arb_duration() -> impl Strategy<Value = u32> {
    prop_oneof![1u32..=120, 121u32..=WHOLE_DAY]
}

/// Mandatory attendees come from the first two names of the pool; optional
/// ones from the rest, sometimes also repeating a mandatory name.
fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (
        prop::sample::subsequence(POOL[..2].to_vec(), 0..=2),
        prop::sample::subsequence(POOL[1..].to_vec(), 0..=4),
        1u32..=240,
    )
        .prop_map(|(mandatory, optional, duration)| {
            MeetingRequest::new(mandatory, optional, duration).unwrap()
        })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Per-minute busy map for the events involving any of `attendees`.
fn busy_minutes(events: &[Event], attendees: &BTreeSet<String>) -> Vec<bool> {
    let mut busy = vec![false; WHOLE_DAY as usize];
    for event in events.iter().filter(|e| e.involves_any(attendees)) {
        for minute in event.when().start()..event.when().end() {
            busy[minute as usize] = true;
        }
    }
    busy
}

/// Free runs of at least `duration` minutes, computed minute by minute.
fn reference_windows(busy: &[bool], duration: u32) -> Vec<(u32, u32)> {
    let mut windows = Vec::new();
    let mut run_start: Option<u32> = None;
    for minute in 0..=WHOLE_DAY {
        let free = minute < WHOLE_DAY && !busy[minute as usize];
        match (free, run_start) {
            (true, None) => run_start = Some(minute),
            (false, Some(start)) => {
                if minute - start >= duration {
                    windows.push((start, minute));
                }
                run_start = None;
            }
            _ => {}
        }
    }
    windows
}

fn total_minutes(windows: &[TimeRange]) -> u32 {
    windows.iter().map(TimeRange::duration).sum()
}

/// Largest subset of optional attendees that can meet with every mandatory
/// attendee, found by trying every subset. Names that are also mandatory do
/// not count as optional.
fn brute_force_best_size(events: &[Event], request: &MeetingRequest) -> Option<usize> {
    let optional: Vec<&String> = request
        .optional_attendees()
        .difference(request.attendees())
        .collect();
    let mut best = None;
    for mask in 0u32..(1 << optional.len()) {
        let mut attendees = request.attendees().clone();
        for (i, name) in optional.iter().enumerate() {
            if mask & (1 << i) != 0 {
                attendees.insert((*name).clone());
            }
        }
        if !find_free_windows(events, &attendees, request.duration()).is_empty() {
            let size = mask.count_ones() as usize;
            best = Some(best.map_or(size, |b: usize| b.max(size)));
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Property 1: Windows are long enough, sorted, and separated
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn windows_are_sorted_disjoint_and_long_enough(
        events in arb_events(),
        attendees in arb_attendees(),
        duration in arb_duration(),
    ) {
        let windows = find_free_windows(&events, &attendees, duration);

        for window in &windows {
            prop_assert!(window.duration() >= duration, "{} shorter than {}", window, duration);
        }
        for pair in windows.windows(2) {
            prop_assert!(
                pair[0].end() < pair[1].start(),
                "windows not separated: {} then {}",
                pair[0],
                pair[1]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Windows are exactly the long-enough free runs of the day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn windows_match_minute_by_minute_reference(
        events in arb_events(),
        attendees in arb_attendees(),
        duration in arb_duration(),
    ) {
        let windows = find_free_windows(&events, &attendees, duration);
        let bounds: Vec<(u32, u32)> = windows.iter().map(|w| (w.start(), w.end())).collect();

        let busy = busy_minutes(&events, &attendees);
        prop_assert_eq!(bounds, reference_windows(&busy, duration));
    }
}

// ---------------------------------------------------------------------------
// Property 3: No attendees means the whole day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn empty_attendee_set_is_whole_day(
        events in arb_events(),
        duration in 1u32..=2 * WHOLE_DAY,
    ) {
        let windows = find_free_windows(&events, &BTreeSet::new(), duration);

        if duration <= WHOLE_DAY {
            prop_assert_eq!(windows, vec![TimeRange::WHOLE_DAY]);
        } else {
            prop_assert!(windows.is_empty());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: More busy time never means more free time
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn adding_an_event_never_adds_free_time(
        events in arb_events(),
        extra in arb_event(),
        attendees in arb_attendees(),
        duration in arb_duration(),
    ) {
        let before = total_minutes(&find_free_windows(&events, &attendees, duration));

        let mut more = events.clone();
        more.push(extra);
        let after = total_minutes(&find_free_windows(&more, &attendees, duration));

        prop_assert!(after <= before, "free time grew from {} to {}", before, after);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Queries are deterministic
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn query_is_idempotent(events in arb_events(), request in arb_request()) {
        prop_assert_eq!(query(&events, &request), query(&events, &request));
    }
}

// ---------------------------------------------------------------------------
// Property 6: Best effort reaches the largest feasible optional subset
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn best_effort_matches_brute_force_subset_size(
        events in arb_events(),
        request in arb_request(),
    ) {
        let plan = optimize_optional_attendees(&events, &request);

        match brute_force_best_size(&events, &request) {
            // Not even the mandatory attendees can meet.
            None => {
                prop_assert!(plan.windows.is_empty());
                prop_assert!(plan.accommodated.is_empty());
            }
            // Nobody to meet with.
            Some(0)
                if request.attendees().is_empty()
                    && !request.optional_attendees().is_empty() =>
            {
                prop_assert!(plan.windows.is_empty());
            }
            Some(size) => {
                prop_assert_eq!(plan.accommodated.len(), size);
                prop_assert!(plan.accommodated.is_subset(request.optional_attendees()));
                prop_assert!(plan.accommodated.is_disjoint(request.attendees()));

                let attendees: BTreeSet<String> =
                    request.attendees().union(&plan.accommodated).cloned().collect();
                prop_assert!(!plan.windows.is_empty());
                prop_assert_eq!(
                    &plan.windows,
                    &find_free_windows(&events, &attendees, request.duration())
                );
            }
        }
    }
}
