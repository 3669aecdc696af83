//! JSONL parser for host event traces.
//!
//! Each trace line records one thing the host page did: a scroll/resize, a navigation, an
//! explicit page view, an identify call, or the host going away. Lines are parsed into
//! [`TraceLine`] values that the replay loop feeds to a client.

use serde::Deserialize;
use serde_json::Value;

use crate::model::error::ParseError;
use crate::viewport::ViewportUpdate;

// Event type string constants
const EVENT_TYPE_VIEWPORT: &str = "viewport";
const EVENT_TYPE_NAVIGATE: &str = "navigate";
const EVENT_TYPE_PAGEVIEW: &str = "pageview";
const EVENT_TYPE_IDENTIFY: &str = "identify";
const EVENT_TYPE_DETACH: &str = "detach";

/// Raw JSON shape shared by every trace line.
#[derive(Debug, Deserialize)]
struct RawTraceLine {
    #[serde(rename = "type")]
    event_type: Option<String>,
    #[serde(default)]
    ts: Option<Value>,
    #[serde(default)]
    scroll_y: Option<f64>,
    #[serde(default)]
    viewport_height: Option<f64>,
    #[serde(default, alias = "document_scroll_height")]
    scroll_height: Option<f64>,
    #[serde(default)]
    pathname: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    distinct_id: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// One host event.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// Scroll or resize notification carrying the new readings.
    Viewport(ViewportUpdate),
    /// Location change followed by a page-view capture.
    Navigate {
        /// New location path.
        pathname: String,
    },
    /// Page-view capture at the current location.
    Pageview,
    /// Identify call with the raw id as the host passed it.
    Identify {
        /// Any JSON value; type checks happen in `identify`.
        distinct_id: Value,
    },
    /// The host environment disappears.
    Detach,
}

/// A parsed line: the event and its optional timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceLine {
    /// 1-based line number in the trace.
    pub line_number: usize,
    /// Host timestamp, used only for throttling.
    pub ts: Option<u64>,
    /// What the host did.
    pub event: TraceEvent,
}

/// Result of parsing a trace line without failing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// A usable event.
    Valid(TraceLine),
    /// Empty or whitespace-only line.
    Blank,
    /// A line that could not be parsed. Replay logs and skips it.
    Malformed(ParseError),
}

/// Parse a single trace line gracefully.
///
/// Never returns an error; blank lines and failures are reported as variants so a replay
/// can carry on past them.
pub fn parse_line_graceful(raw: &str, line_number: usize) -> ParseResult {
    if raw.trim().is_empty() {
        return ParseResult::Blank;
    }
    match parse_line(raw, line_number) {
        Ok(line) => ParseResult::Valid(line),
        Err(e) => ParseResult::Malformed(e),
    }
}

/// Parse a single trace line.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - JSON is malformed or not an object
/// - `type` is missing or unknown
/// - a required field for the event is missing or has the wrong shape
pub fn parse_line(raw: &str, line_number: usize) -> Result<TraceLine, ParseError> {
    let raw_line: RawTraceLine = serde_json::from_str(raw).map_err(|e| {
        if e.is_syntax() || e.is_eof() {
            ParseError::InvalidJson {
                line: line_number,
                message: e.to_string(),
            }
        } else {
            ParseError::InvalidField {
                line: line_number,
                field: "event",
                message: e.to_string(),
            }
        }
    })?;

    let ts = parse_ts(raw_line.ts.as_ref(), line_number)?;

    let event_type = raw_line.event_type.ok_or(ParseError::MissingField {
        line: line_number,
        field: "type",
    })?;

    let event = match event_type.as_str() {
        EVENT_TYPE_VIEWPORT => TraceEvent::Viewport(ViewportUpdate {
            scroll_y: raw_line.scroll_y,
            viewport_height: raw_line.viewport_height,
            scroll_height: raw_line.scroll_height,
        }),
        EVENT_TYPE_NAVIGATE => TraceEvent::Navigate {
            pathname: raw_line.pathname.ok_or(ParseError::MissingField {
                line: line_number,
                field: "pathname",
            })?,
        },
        EVENT_TYPE_PAGEVIEW => TraceEvent::Pageview,
        EVENT_TYPE_IDENTIFY => TraceEvent::Identify {
            distinct_id: raw_line.distinct_id.ok_or(ParseError::MissingField {
                line: line_number,
                field: "distinct_id",
            })?,
        },
        EVENT_TYPE_DETACH => TraceEvent::Detach,
        _ => {
            return Err(ParseError::UnknownEventType {
                line: line_number,
                event_type,
            })
        }
    };

    Ok(TraceLine {
        line_number,
        ts,
        event,
    })
}

fn parse_ts(ts: Option<&Value>, line_number: usize) -> Result<Option<u64>, ParseError> {
    match ts {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or(ParseError::InvalidField {
            line: line_number,
            field: "ts",
            message: format!("expected non-negative integer milliseconds, got {}", value),
        }),
    }
}
