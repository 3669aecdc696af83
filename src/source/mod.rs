//! Trace input sources.
//!
//! This module provides input sources for JSONL trace data:
//! - File input for recorded traces
//! - Stdin for piped input (e.g. a live host forwarding events)
//! - Unified InputSource enum for both

use crate::model::error::InputError;
use std::io::BufRead;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for JSONL traces.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Recorded trace file
    File(FileSource),
    /// Piped stdin, read until EOF
    Stdin(StdinSource),
}

impl InputSource {
    /// Line reader over the source. Lines are streamed, never buffered whole.
    pub fn into_reader(self) -> Box<dyn BufRead> {
        match self {
            InputSource::File(f) => Box::new(f.into_reader()),
            InputSource::Stdin(s) => Box::new(s.into_reader()),
        }
    }

    /// Human-readable origin for log messages.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: open FileSource
/// 2. Else if stdin is piped: use StdinSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
/// Returns `InputError::FileNotFound` if file does not exist.
/// Returns `InputError::Io` for I/O errors while opening the file.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::open(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
