//! Prompt/read loop over a line-oriented input stream.
//!
//! Every read consumes input up to and including the next line terminator,
//! so a malformed answer never leaks into the following prompt.

use std::fmt;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::scan::{Scan, first_token};

/// Input ended while an answer was still required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input closed while waiting for an answer")
    }
}

impl std::error::Error for InputClosed {}

/// Outcome of a single numeric read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading<T> {
    Value(T),
    /// The line held no numeric prefix; the line has been discarded.
    Malformed,
}

/// A prompt/answer channel. Generic so tests can script the input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}").context("write to console")
    }

    /// Write `text` without a newline and flush so it shows before the read.
    pub fn prompt(&mut self, text: impl fmt::Display) -> Result<()> {
        write!(self.output, "{text}").context("write prompt")?;
        self.output.flush().context("flush prompt")
    }

    /// Raw line including its terminator; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so they
    /// reach the caller as ordinary (malformed) input.
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("read from console")?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Next line holding at least one token. Blank lines are skipped, like a
    /// numeric `scanf` waiting for its value.
    fn next_token_line(&mut self) -> Result<String> {
        loop {
            let line = self.next_line()?.ok_or(InputClosed)?;
            if first_token(&line).is_some() {
                return Ok(line);
            }
        }
    }

    /// Read one numeric answer without retrying.
    pub fn read_once<T: Scan>(&mut self) -> Result<Reading<T>> {
        let line = self.next_token_line()?;
        let token = first_token(&line).unwrap_or_default();
        match T::scan(token) {
            Some(value) => Ok(Reading::Value(value)),
            None => {
                debug!(token, "malformed numeric input");
                Ok(Reading::Malformed)
            }
        }
    }

    /// Read a numeric answer, printing `retry` and reading again until the
    /// line starts with a number.
    pub fn read_until_valid<T: Scan>(&mut self, retry: &str) -> Result<T> {
        self.read_until_accepted(retry, |_| true)
    }

    /// Like [`Console::read_until_valid`], but also re-prompts while
    /// `accept` rejects the value.
    pub fn read_until_accepted<T, F>(&mut self, retry: &str, accept: F) -> Result<T>
    where
        T: Scan,
        F: Fn(&T) -> bool,
    {
        loop {
            match self.read_once::<T>()? {
                Reading::Value(value) if accept(&value) => return Ok(value),
                Reading::Value(_) | Reading::Malformed => self.prompt(retry)?,
            }
        }
    }

    /// Read a free-text line, keeping at most `max_chars` characters.
    ///
    /// The line terminator is stripped and any overflow is discarded with the
    /// rest of the line.
    pub fn read_text(&mut self, max_chars: usize) -> Result<String> {
        let line = self.next_line()?.ok_or(InputClosed)?;
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(trimmed.chars().take(max_chars).collect())
    }

    /// Wait for the user to press Enter. End of input counts as Enter.
    pub fn pause(&mut self) -> Result<()> {
        self.next_line()?;
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::test_support::{scripted_console, transcript};

    #[test]
    fn read_once_reports_malformed_and_consumes_the_line() {
        let mut console = scripted_console(&["abc 5", "7"]);
        assert_eq!(console.read_once::<i64>().expect("read"), Reading::Malformed);
        assert_eq!(console.read_once::<i64>().expect("read"), Reading::Value(7));
    }

    #[test]
    fn read_once_discards_trailing_tokens() {
        let mut console = scripted_console(&["1 2 3", "4"]);
        assert_eq!(console.read_once::<i64>().expect("read"), Reading::Value(1));
        assert_eq!(console.read_once::<i64>().expect("read"), Reading::Value(4));
    }

    #[test]
    fn read_once_skips_blank_lines() {
        let mut console = scripted_console(&["", "   ", "9"]);
        assert_eq!(console.read_once::<i64>().expect("read"), Reading::Value(9));
    }

    #[test]
    fn read_until_valid_retries_with_message() {
        let mut console = scripted_console(&["x", "y", "3"]);
        let value: i64 = console.read_until_valid("again: ").expect("read");
        assert_eq!(value, 3);
        assert_eq!(transcript(&console), "again: again: ");
    }

    #[test]
    fn read_until_accepted_rejects_out_of_range() {
        let mut console = scripted_console(&["150", "-1", "oops", "88.5"]);
        let value: f64 = console
            .read_until_accepted("range: ", |v| (0.0..=100.0).contains(v))
            .expect("read");
        assert_eq!(value, 88.5);
        assert_eq!(transcript(&console).matches("range: ").count(), 3);
    }

    #[test]
    fn end_of_input_is_input_closed() {
        let mut console = scripted_console(&[]);
        let err = console.read_once::<i64>().expect_err("closed");
        assert!(err.downcast_ref::<InputClosed>().is_some());
    }

    #[test]
    fn read_text_strips_terminator_and_truncates() {
        let mut console = scripted_console(&["Ada Lovelace\r", "next"]);
        assert_eq!(console.read_text(3).expect("text"), "Ada");
        assert_eq!(console.read_text(10).expect("text"), "next");
    }

    #[test]
    fn read_text_accepts_empty_line() {
        let mut console = scripted_console(&[""]);
        assert_eq!(console.read_text(10).expect("text"), "");
    }

    #[test]
    fn non_utf8_line_is_malformed_not_fatal() {
        let input = Cursor::new(vec![0xff, b'\n', b'7', b'\n']);
        let mut console = Console::new(input, Vec::new());
        assert_eq!(console.read_once::<i64>().expect("read"), Reading::Malformed);
        assert_eq!(console.read_once::<i64>().expect("read"), Reading::Value(7));
    }

    #[test]
    fn latin1_name_is_read_lossily() {
        let input = Cursor::new(b"Jos\xe9\nnext\n".to_vec());
        let mut console = Console::new(input, Vec::new());
        assert_eq!(console.read_text(49).expect("text"), "Jos\u{fffd}");
        assert_eq!(console.read_text(49).expect("text"), "next");
    }

    #[test]
    fn pause_tolerates_end_of_input() {
        let mut console = scripted_console(&[]);
        console.pause().expect("pause");
    }
}
