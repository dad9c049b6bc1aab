//! Bounded line reading.
//!
//! Lines are read into a reused buffer that never grows past the configured
//! maximum. A line that does not fit is drained up to its newline and
//! reported once as [`Line::TooLong`].

use std::borrow::Cow;
use std::io::{self, BufRead};

/// One line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// A line that fits, including its trailing `\n` when present.
    Text { number: usize, text: Cow<'a, str> },
    /// A line at or over the limit. `length` counts the whole line.
    TooLong { number: usize, length: usize },
}

/// Reads lines of at most `max_line_length - 2` bytes plus newline.
///
/// The limit leaves room for the newline and a string terminator, so with
/// the default of 250 a line is accepted when it holds 248 bytes or fewer
/// before its `\n`.
pub struct LineReader<R> {
    inner: R,
    max_line_length: usize,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_line_length: usize) -> Self {
        LineReader {
            inner,
            max_line_length,
            buf: Vec::with_capacity(max_line_length.min(4096)),
            line_number: 0,
        }
    }

    /// Length at which a line counts as too long.
    fn limit(&self) -> usize {
        self.max_line_length.saturating_sub(1)
    }

    /// Read the next line, `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        let limit = self.limit();
        let mut length = 0;
        self.buf.clear();

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            let (chunk, done) = match available.iter().position(|&b| b == b'\n') {
                Some(i) => (&available[..=i], true),
                None => (available, false),
            };
            let used = chunk.len();
            let room = limit.saturating_sub(self.buf.len());
            self.buf.extend_from_slice(&chunk[..used.min(room)]);
            self.inner.consume(used);
            length += used;

            if done {
                break;
            }
        }

        if length == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if length >= limit {
            log::trace!("line {} is {length} bytes long", self.line_number);
            return Ok(Some(Line::TooLong {
                number: self.line_number,
                length,
            }));
        }
        Ok(Some(Line::Text {
            number: self.line_number,
            text: String::from_utf8_lossy(&self.buf),
        }))
    }
}
