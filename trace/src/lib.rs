//! Trace parsing and time-ordering primitives for simulator performance runs.
//!
//! Multithreaded simulator runs emit a lock/condition-variable trace in which
//! every worker writes timestamped lines and the driver writes a `sync` line
//! at each barrier. Between two barriers the workers interleave freely, so
//! the raw trace arrives out of timestamp order; this crate restores
//! per-segment order without ever moving a line across a barrier.
//!
//! # Design Principles
//!
//! - **Single pass** - The sorter streams the input once and buffers only the current segment.
//! - **Lossless** - Every input line appears in the output exactly once; sync lines verbatim.
//! - **Explicit errors** - Malformed lines fail the run with a structured error, never a panic.
//!
//! # Example
//!
//! ```
//! use trace::sort_trace;
//!
//! let input = "time : 5, core 0 write\ntime : 2, core 1 read\nsync 0\n";
//! let mut output = Vec::new();
//! let stats = sort_trace(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(output, b"time : 2, core 1 read\ntime : 5, core 0 write\nsync 0\n");
//! assert_eq!(stats.segments, 1);
//! ```

mod error;
mod line;
mod segment;
mod sort;

pub use error::{SortError, SortResult, TimestampError};
pub use line::{is_sync, timestamp, SYNC_MARKER};
pub use segment::SegmentBuffer;
pub use sort::{scan_trace, sort_trace, TraceStats};
