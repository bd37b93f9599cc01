//! Trace line classification and timestamp extraction.

use crate::error::TimestampError;

/// Substring that marks a synchronization barrier line.
pub const SYNC_MARKER: &str = "sync";

/// Returns whether `line` is a synchronization marker.
///
/// Marker lines may carry digits of their own (`sync 7`), so callers must
/// check this before attempting timestamp extraction.
pub fn is_sync(line: &str) -> bool {
    line.contains(SYNC_MARKER)
}

/// Extracts the timestamp of an event line: the first run of consecutive
/// ASCII decimal digits, parsed as `u64`.
pub fn timestamp(line: &str) -> Result<u64, TimestampError> {
    let bytes = line.as_bytes();
    let start = bytes
        .iter()
        .position(|b| b.is_ascii_digit())
        .ok_or(TimestampError::Missing)?;
    let len = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let digits = &line[start..start + len];
    digits.parse().map_err(|_| TimestampError::Overflow {
        digits: digits.to_string(),
    })
}
