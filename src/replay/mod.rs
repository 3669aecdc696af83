//! Trace replay.
//!
//! Feeds a JSONL host trace through a [`Client`] backed by a [`SimulatedViewport`] and
//! writes every captured event to the output as one JSON document per line.
//!
//! Malformed lines and refused identify calls are logged and skipped; only I/O failures
//! stop a replay.

use std::io::{BufRead, Write};
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::{Client, MemorySink};
use crate::identity::MemoryStore;
use crate::model::error::AppError;
use crate::model::CapturedEvent;
use crate::parser::{self, ParseResult, TraceEvent};
use crate::viewport::SimulatedViewport;

pub mod throttle;

pub use throttle::ScrollThrottle;

/// Replay knobs resolved from config and CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Minimum trace-time spacing between delivered scroll ticks; 0 delivers all.
    pub scroll_throttle_ms: u64,
    /// Write events as indented JSON instead of one line each.
    pub pretty: bool,
}

/// Counters describing a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Lines consumed, blank ones included.
    pub lines_read: usize,
    /// Events written to the output.
    pub events_emitted: usize,
    /// Viewport lines that reached the page-view manager.
    pub ticks_delivered: usize,
    /// Viewport lines applied to the host but held back by the throttle.
    pub ticks_throttled: usize,
    /// Malformed lines.
    pub skipped_lines: usize,
    /// Identify calls the client refused.
    pub identify_rejections: usize,
}

type ReplayClient = Client<Rc<SimulatedViewport>, MemoryStore, MemorySink>;

/// Replay state: the simulated host and the client observing it.
pub struct Replayer {
    host: Rc<SimulatedViewport>,
    client: ReplayClient,
    throttle: ScrollThrottle,
    summary: ReplaySummary,
}

impl Replayer {
    /// Start from a detached host; the first `viewport` or `navigate` line attaches it.
    pub fn new(options: ReplayOptions) -> Self {
        let host = Rc::new(SimulatedViewport::detached());
        let client = Client::new(Rc::clone(&host), MemoryStore::new(), MemorySink::new());
        Self {
            host,
            client,
            throttle: ScrollThrottle::new(options.scroll_throttle_ms),
            summary: ReplaySummary::default(),
        }
    }

    /// Process one raw line and return the events it produced.
    pub fn process_line(&mut self, raw: &str, line_number: usize) -> Vec<CapturedEvent> {
        self.summary.lines_read += 1;

        let line = match parser::parse_line_graceful(raw, line_number) {
            ParseResult::Valid(line) => line,
            ParseResult::Blank => return Vec::new(),
            ParseResult::Malformed(err) => {
                warn!(line = err.line(), error = %err, "Skipping malformed trace line");
                self.summary.skipped_lines += 1;
                return Vec::new();
            }
        };

        match line.event {
            TraceEvent::Viewport(update) => {
                // The host reading changes even when the tick itself is throttled.
                self.host.apply(&update);
                if self.throttle.admit(line.ts) {
                    self.client.on_scroll();
                    self.summary.ticks_delivered += 1;
                } else {
                    self.summary.ticks_throttled += 1;
                }
            }
            TraceEvent::Navigate { pathname } => {
                self.host.navigate(pathname);
                self.client.capture_pageview();
            }
            TraceEvent::Pageview => {
                self.client.capture_pageview();
            }
            TraceEvent::Identify { distinct_id } => {
                if let Err(err) = self.client.identify(&distinct_id) {
                    warn!(line = line_number, error = %err, "Identify refused");
                    self.summary.identify_rejections += 1;
                }
            }
            TraceEvent::Detach => {
                debug!(line = line_number, "Host detached");
                self.host.detach();
            }
        }

        let events = self.client.sink_mut().drain();
        self.summary.events_emitted += events.len();
        events
    }

    /// Counters so far.
    pub fn summary(&self) -> ReplaySummary {
        self.summary
    }

    /// The client driven by this replay.
    pub fn client(&self) -> &ReplayClient {
        &self.client
    }
}

/// Replay an entire trace, writing events to `output`.
///
/// # Errors
///
/// Returns `AppError::InputRead` if reading a line fails and `AppError::Output` if
/// writing an event fails. Malformed lines do not produce errors.
pub fn replay<B: BufRead, W: Write>(
    input: B,
    mut output: W,
    options: ReplayOptions,
) -> Result<ReplaySummary, AppError> {
    let mut replayer = Replayer::new(options);

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(crate::model::error::InputError::from)?;
        for event in replayer.process_line(&line, index + 1) {
            write_event(&mut output, &event, options.pretty)?;
        }
    }
    output.flush()?;

    let summary = replayer.summary();
    info!(
        lines_read = summary.lines_read,
        events_emitted = summary.events_emitted,
        ticks_delivered = summary.ticks_delivered,
        ticks_throttled = summary.ticks_throttled,
        skipped_lines = summary.skipped_lines,
        identify_rejections = summary.identify_rejections,
        "Replay finished"
    );
    Ok(summary)
}

fn write_event<W: Write>(
    output: &mut W,
    event: &CapturedEvent,
    pretty: bool,
) -> std::io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *output, event)?;
    } else {
        serde_json::to_writer(&mut *output, event)?;
    }
    output.write_all(b"\n")
}
