//! Stdin-based trace source for piped input.

use crate::model::error::InputError;
use std::io::{BufReader, IsTerminal, Stdin};

/// Piped stdin, e.g. `cat trace.jsonl | pageview-tracker`.
///
/// Construction refuses an interactive terminal so the replay never blocks waiting for a
/// user who forgot to pipe data.
#[derive(Debug)]
pub struct StdinSource {
    stdin: Stdin,
}

impl StdinSource {
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { stdin })
    }

    /// Buffered reader over stdin.
    pub fn into_reader(self) -> BufReader<Stdin> {
        BufReader::new(self.stdin)
    }
}
