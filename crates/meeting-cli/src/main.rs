//! `meetq` CLI — find meeting windows in a day of calendar events.
//!
//! Input is a JSON document holding the day's events and, for most
//! subcommands, a meeting request:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "start": 540, "end": 570, "attendees": ["alice", "bob"]}
//!   ],
//!   "request": {"attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30}
//! }
//! ```
//!
//! Times are minutes since midnight.
//!
//! ## Usage
//!
//! ```sh
//! # Windows for the request, falling back to best effort over optional attendees
//! meetq query -i calendar.json
//!
//! # Free windows for an explicit attendee set
//! meetq free -i calendar.json --attendee alice --attendee bob --duration 45
//!
//! # Which events block 09:00-10:00 for the request's attendees
//! meetq conflicts -i calendar.json --start 540 --end 600
//!
//! # Human-readable output with debug logging on stderr
//! meetq -vv --format text query < calendar.json
//! ```

mod output;

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use meeting_engine::{Event, MeetingRequest, TimeRange};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::output::{ConflictsReport, FreeReport, QueryReport};

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find meeting windows in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = Format::Json)]
    format: Format,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find windows for the request in the input document
    Query {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Find free windows for an explicit set of attendees
    Free {
        #[command(flatten)]
        io: IoArgs,
        /// Attendee whose events block time (repeatable; none means everyone is free)
        #[arg(short, long = "attendee")]
        attendees: Vec<String>,
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: u32,
    },
    /// List events that block a proposed window for the request's attendees
    Conflicts {
        #[command(flatten)]
        io: IoArgs,
        /// Window start, minutes since midnight
        #[arg(long)]
        start: u32,
        /// Window end (exclusive), minutes since midnight
        #[arg(long)]
        end: u32,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Json,
    Text,
}

/// The input document.
#[derive(Deserialize)]
struct Calendar {
    #[serde(default)]
    events: Vec<Event>,
    request: Option<MeetingRequest>,
}

impl Calendar {
    fn request(&self) -> Result<&MeetingRequest> {
        self.request
            .as_ref()
            .context("Input document has no \"request\" section")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (content, output) = match cli.command {
        Commands::Query { io } => {
            let calendar = read_calendar(io.input.as_deref())?;
            let request = calendar.request()?;
            let outcome = meeting_engine::query_detailed(&calendar.events, request);
            info!(
                windows = outcome.windows.len(),
                kind = ?outcome.kind,
                "query finished"
            );
            (QueryReport::from(&outcome).render(cli.format)?, io.output)
        }
        Commands::Free {
            io,
            attendees,
            duration,
        } => {
            let calendar = read_calendar(io.input.as_deref())?;
            let attendees: BTreeSet<String> = attendees.into_iter().collect();
            let windows = meeting_engine::find_free_windows(&calendar.events, &attendees, duration);
            info!(windows = windows.len(), "free window search finished");
            (FreeReport::new(&windows).render(cli.format)?, io.output)
        }
        Commands::Conflicts { io, start, end } => {
            let window = TimeRange::from_start_end(start, end, false)
                .with_context(|| format!("Invalid window {start}-{end}"))?;
            let calendar = read_calendar(io.input.as_deref())?;
            let request = calendar.request()?;
            let conflicts =
                meeting_engine::find_conflicts(&calendar.events, window, &request.all_attendees());
            info!(conflicts = conflicts.len(), %window, "conflict check finished");
            (ConflictsReport::new(&conflicts).render(cli.format)?, io.output)
        }
    };

    write_output(output.as_deref(), &content)
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v` flags when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_calendar(path: Option<&str>) -> Result<Calendar> {
    let json = read_input(path)?;
    let calendar: Calendar =
        serde_json::from_str(&json).context("Failed to parse calendar JSON")?;
    debug!(events = calendar.events.len(), "calendar loaded");
    Ok(calendar)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
