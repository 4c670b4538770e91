//! Printable-ASCII byte filter
//!
//! Keeps bytes 0x20..=0x7E and `\n`, drops everything else (control bytes,
//! carriage returns, tabs, anything above 0x7E) and preserves byte order.

use super::stats::CleanStats;
use crate::constants::{CLEAN_BUFFER_SIZE, LINE_TERMINATOR};
use std::io::{self, ErrorKind, Read, Write};

/// Check if a byte survives the filter
pub fn is_kept(byte: u8) -> bool {
    byte == LINE_TERMINATOR || (0x20..=0x7e).contains(&byte)
}

/// Copy `reader` to `writer`, keeping printable ASCII and newlines
pub fn clean_stream<R: Read, W: Write>(mut reader: R, mut writer: W) -> io::Result<CleanStats> {
    let mut stats = CleanStats::default();
    let mut buffer = vec![0u8; CLEAN_BUFFER_SIZE];
    let mut kept = Vec::with_capacity(CLEAN_BUFFER_SIZE);

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        stats.bytes_read += read as u64;

        kept.clear();
        kept.extend(buffer[..read].iter().copied().filter(|&b| is_kept(b)));
        stats.lines_written += kept.iter().filter(|&&b| b == LINE_TERMINATOR).count() as u64;
        stats.bytes_written += kept.len() as u64;

        writer.write_all(&kept)?;
    }

    writer.flush()?;
    Ok(stats)
}
