//! Error types for trace sorting operations.

use std::fmt;
use std::io;

/// Result type for trace sorting operations.
pub type SortResult<T> = Result<T, SortError>;

/// Reasons a timestamp cannot be extracted from an event line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The line contains no run of decimal digits.
    Missing,

    /// The first digit run does not fit in a `u64`.
    Overflow {
        /// The digit run as it appeared in the line.
        digits: String,
    },
}

/// Errors that can occur while sorting or scanning a trace.
#[derive(Debug)]
#[non_exhaustive]
pub enum SortError {
    /// An event line without a usable timestamp.
    BadEventLine {
        /// 1-based line number in the input.
        line_number: usize,
        /// The offending line, terminator stripped.
        line: String,
        /// Why timestamp extraction failed.
        reason: TimestampError,
    },

    /// Reading the input or writing the output failed.
    Io(io::Error),
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no decimal digits"),
            Self::Overflow { digits } => {
                write!(f, "digit run {digits} does not fit in a u64")
            }
        }
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadEventLine {
                line_number,
                line,
                reason,
            } => {
                write!(f, "line {line_number}: {reason}: {line:?}")
            }
            Self::Io(err) => write!(f, "trace i/o error: {err}"),
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::BadEventLine { .. } => None,
        }
    }
}

impl From<io::Error> for SortError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
