//! Byte-oriented line reading for data and reference files
//!
//! The raw dataset is not guaranteed to be valid UTF-8, so lines are read as
//! bytes into a reused buffer. The `\n` terminator and a trailing `\r` are
//! removed from each returned line.

use crate::constants::LINE_TERMINATOR;
use std::io::{self, BufRead};

/// Reads newline-terminated lines into a single reused buffer
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    lines_read: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(512),
            lines_read: 0,
        }
    }

    /// Read the next line without its terminator, `None` at end of input
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buffer.clear();
        let read = self.reader.read_until(LINE_TERMINATOR, &mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&LINE_TERMINATOR) {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        self.lines_read += 1;
        Ok(Some(&self.buffer))
    }

    /// Number of lines returned so far (1-based number of the last line)
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}
