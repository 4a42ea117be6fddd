//! Serde-friendly report DTOs and their JSON/text rendering.

use std::fmt::Write as _;

use anyhow::Result;
use chrono::NaiveTime;
use meeting_engine::{Conflict, MatchKind, QueryOutcome, TimeRange};
use serde::Serialize;

use crate::Format;

/// Render a minute offset as `HH:MM`; the end of the day renders as `24:00`.
fn clock(minute: u32) -> String {
    match NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0) {
        Some(time) => time.format("%H:%M").to_string(),
        None => "24:00".to_string(),
    }
}

#[derive(Serialize)]
struct WindowDto {
    start: u32,
    end: u32,
    duration_minutes: u32,
    end_of_day: bool,
    start_time: String,
    end_time: String,
}

impl From<&TimeRange> for WindowDto {
    fn from(w: &TimeRange) -> Self {
        Self {
            start: w.start(),
            end: w.end(),
            duration_minutes: w.duration(),
            end_of_day: w.ends_at_end_of_day(),
            start_time: clock(w.start()),
            end_time: clock(w.end()),
        }
    }
}

fn window_line(w: &WindowDto) -> String {
    format!("{}-{} ({} min)", w.start_time, w.end_time, w.duration_minutes)
}

fn render_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[derive(Serialize)]
pub(crate) struct QueryReport {
    kind: MatchKind,
    accommodated: Vec<String>,
    windows: Vec<WindowDto>,
}

impl From<&QueryOutcome> for QueryReport {
    fn from(outcome: &QueryOutcome) -> Self {
        Self {
            kind: outcome.kind,
            accommodated: outcome.accommodated.iter().cloned().collect(),
            windows: outcome.windows.iter().map(WindowDto::from).collect(),
        }
    }
}

impl QueryReport {
    pub(crate) fn render(&self, format: Format) -> Result<String> {
        if format == Format::Json {
            return render_json(self);
        }

        let mut text = String::new();
        let kind = match self.kind {
            MatchKind::AllAttendees => "all attendees",
            MatchKind::BestEffort => "best effort",
        };
        writeln!(text, "Match: {}", kind)?;
        if !self.accommodated.is_empty() {
            writeln!(text, "Optional attendees: {}", self.accommodated.join(", "))?;
        }
        if self.windows.is_empty() {
            text.push_str("No windows found");
        }
        for w in &self.windows {
            writeln!(text, "{}", window_line(w))?;
        }
        Ok(text.trim_end().to_string())
    }
}

#[derive(Serialize)]
pub(crate) struct FreeReport {
    windows: Vec<WindowDto>,
}

impl FreeReport {
    pub(crate) fn new(windows: &[TimeRange]) -> Self {
        Self {
            windows: windows.iter().map(WindowDto::from).collect(),
        }
    }

    pub(crate) fn render(&self, format: Format) -> Result<String> {
        if format == Format::Json {
            return render_json(self);
        }
        if self.windows.is_empty() {
            return Ok("No windows found".to_string());
        }
        let lines: Vec<String> = self.windows.iter().map(window_line).collect();
        Ok(lines.join("\n"))
    }
}

#[derive(Serialize)]
struct ConflictDto {
    title: String,
    start: u32,
    end: u32,
    busy_attendees: Vec<String>,
    overlap_minutes: u32,
}

#[derive(Serialize)]
pub(crate) struct ConflictsReport {
    conflicts: Vec<ConflictDto>,
}

impl ConflictsReport {
    pub(crate) fn new(conflicts: &[Conflict]) -> Self {
        Self {
            conflicts: conflicts
                .iter()
                .map(|c| ConflictDto {
                    title: c.event.title().to_string(),
                    start: c.event.when().start(),
                    end: c.event.when().end(),
                    busy_attendees: c.busy_attendees.iter().cloned().collect(),
                    overlap_minutes: c.overlap_minutes,
                })
                .collect(),
        }
    }

    pub(crate) fn render(&self, format: Format) -> Result<String> {
        if format == Format::Json {
            return render_json(self);
        }
        if self.conflicts.is_empty() {
            return Ok("No conflicts".to_string());
        }
        let lines: Vec<String> = self
            .conflicts
            .iter()
            .map(|c| {
                format!(
                    "{} {}-{}: {} ({} min overlap)",
                    c.title,
                    clock(c.start),
                    clock(c.end),
                    c.busy_attendees.join(", "),
                    c.overlap_minutes
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes() {
        assert_eq!(clock(0), "00:00");
        assert_eq!(clock(570), "09:30");
        assert_eq!(clock(1439), "23:59");
        assert_eq!(clock(1440), "24:00");
    }
}
