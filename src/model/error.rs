//! Error types for pageview-tracker.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the replay binary
//!   - [`InputError`] - Trace file/stdin reading failures (file not found, no input, IO)
//!   - [`ParseError`] - Trace line parsing failures (malformed JSON, unknown event, bad field)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - `std::io::Error` - Writing captured events to the output
//!
//! # Recovery Strategy
//!
//! Parse errors are **non-fatal**: a malformed trace line is logged and skipped so the rest
//! of the trace still replays. Input, config and output errors are fatal.
//!
//! The page-view state machine itself has no error type. Unreadable viewport data degrades
//! to absent fields, never to an `Err`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error encompassing all failure modes of the replay binary.
///
/// # Examples
///
/// ```no_run
/// use pageview_tracker::model::error::{AppError, InputError};
///
/// fn run() -> Result<(), AppError> {
///     // InputError converts to AppError via From
///     let _input = open_trace()?;
///     Ok(())
/// }
/// # fn open_trace() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the trace from file or stdin. Fatal.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse a trace line.
    ///
    /// The replay loop never surfaces this variant for individual lines (they are skipped);
    /// it exists so callers parsing a single line can use `?` into `AppError`.
    #[error("Failed to parse trace line: {0}")]
    Parse(#[from] ParseError),

    /// Config file exists but could not be read or parsed. Fatal.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed. Fatal.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing captured events to the output failed (e.g. broken pipe). Fatal.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when opening the trace input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The trace file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use pageview_tracker::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file argument was given and stdin is an interactive terminal.
    ///
    /// Replaying from a TTY would block forever waiting for input, so this is reported
    /// instead of silently hanging.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing one line of a JSONL trace.
///
/// All variants carry the 1-based line number so the skip warning points at the right line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The line is not syntactically valid JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use pageview_tracker::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     line: 42,
    ///     message: "expected value".to_string()
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number.
        line: usize,
        /// Message from `serde_json`.
        message: String,
    },

    /// The line is valid JSON but lacks a required field (`type`).
    #[error("Missing required field '{field}' at line {line}")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// Name of the missing key.
        field: &'static str,
    },

    /// The `type` tag names an event this replayer does not know.
    #[error("Unknown event type '{event_type}' at line {line}")]
    UnknownEventType {
        /// 1-based line number.
        line: usize,
        /// The unrecognized tag value.
        event_type: String,
    },

    /// A known event carries a field of the wrong shape.
    #[error("Invalid field '{field}' at line {line}: {message}")]
    InvalidField {
        /// 1-based line number.
        line: usize,
        /// Field that failed to deserialize, or `"event"` when serde does not say which.
        field: &'static str,
        /// Deserializer message.
        message: String,
    },
}

impl ParseError {
    /// Line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidJson { line, .. }
            | ParseError::MissingField { line, .. }
            | ParseError::UnknownEventType { line, .. }
            | ParseError::InvalidField { line, .. } => *line,
        }
    }
}
