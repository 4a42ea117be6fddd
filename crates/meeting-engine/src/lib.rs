//! # meeting-engine
//!
//! Deterministic meeting-window search for a single fixed-length day.
//!
//! Given the events already on a calendar and a meeting request, the engine
//! finds every window in which the requested people can meet for the requested
//! duration. Mandatory attendees are always satisfied; optional attendees are
//! satisfied on a best-effort basis when no window works for everyone.
//!
//! All times are minute offsets in `[0, WHOLE_DAY)`. There is no timezone,
//! recurrence, or multi-day reasoning here: callers hand in already-parsed
//! events and consume an ordered list of [`TimeRange`] windows.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_duration(600, 60).unwrap(),
//!     ["alice"],
//! )
//! .unwrap()];
//! let request = MeetingRequest::new(["alice"], Vec::<String>::new(), 30).unwrap();
//!
//! let windows = query(&events, &request);
//! assert_eq!(windows.len(), 2);
//! assert_eq!((windows[0].start(), windows[0].end()), (0, 600));
//! assert!(windows[1].ends_at_end_of_day());
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Minute-of-day intervals and the day constants
//! - [`event`] — Calendar events tagged with their attendees
//! - [`request`] — Meeting requests (duration, mandatory and optional attendees)
//! - [`finder`] — Free windows for an exact attendee set
//! - [`optimizer`] — Best-effort search over optional attendees
//! - [`query`] — Top-level orchestration of the two searches
//! - [`conflict`] — Explain which events block a proposed window
//! - [`error`] — Error types

pub mod conflict;
pub mod error;
pub mod event;
pub mod finder;
pub mod optimizer;
pub mod query;
pub mod request;
pub mod time_range;

pub use conflict::{find_conflicts, Conflict};
pub use error::ScheduleError;
pub use event::Event;
pub use finder::{find_first_free_window, find_free_windows};
pub use optimizer::{find_best_effort_windows, optimize_optional_attendees, BestEffortPlan};
pub use query::{query, query_detailed, MatchKind, QueryOutcome};
pub use request::MeetingRequest;
pub use time_range::{TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
