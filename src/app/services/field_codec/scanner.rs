//! Delimiter scanning for comma-separated lines
//!
//! Fields end at a comma, a newline or the end of input. No quoting rules are
//! applied: a comma inside quotes still ends the field.

use crate::constants::{FIELD_DELIMITER, LINE_TERMINATOR};

/// Return the text from the start of `input` up to, not including, the first
/// comma or newline
pub fn extract_field(input: &str) -> &str {
    let end = input
        .bytes()
        .position(|b| b == FIELD_DELIMITER || b == LINE_TERMINATOR)
        .unwrap_or(input.len());
    &input[..end]
}

/// Read cursor over one line, yielding fields in order
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    line: &'a str,
    position: usize,
    exhausted: bool,
    fields_read: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            position: 0,
            exhausted: false,
            fields_read: 0,
        }
    }

    /// Next field, or `None` once the line has no more delimiters to pass
    pub fn next_field(&mut self) -> Option<&'a str> {
        if self.exhausted {
            return None;
        }

        let rest = &self.line[self.position..];
        let field = extract_field(rest);
        let end = self.position + field.len();

        // Step over the delimiter explicitly; anything but a comma ends the row
        if self.line.as_bytes().get(end) == Some(&FIELD_DELIMITER) {
            self.position = end + 1;
        } else {
            self.position = end;
            self.exhausted = true;
        }

        self.fields_read += 1;
        Some(field)
    }

    /// Number of fields returned so far
    pub fn fields_read(&self) -> usize {
        self.fields_read
    }
}
