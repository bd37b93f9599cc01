//! Streaming time-sort of trace segments.

use std::io::{BufRead, Write};

use crate::error::{SortError, SortResult};
use crate::line::{is_sync, timestamp};
use crate::segment::SegmentBuffer;

/// Counters describing one pass over a trace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceStats {
    /// Total lines read.
    pub total_lines: usize,
    /// Sync marker lines passed through verbatim.
    pub sync_lines: usize,
    /// Event lines buffered and reordered.
    pub event_lines: usize,
    /// Non-empty segments flushed, including a trailing segment.
    pub segments: usize,
    /// Event count of the largest segment.
    pub max_segment_events: usize,
    /// Smallest timestamp observed across all events.
    pub min_timestamp: Option<u64>,
    /// Largest timestamp observed across all events.
    pub max_timestamp: Option<u64>,
}

/// Reorders the event lines of each segment into ascending timestamp order.
///
/// Streams `input` line by line. Event lines are buffered under their
/// timestamp until the next sync marker; each marker flushes the buffered
/// segment in timestamp order (stable for equal timestamps), then passes
/// through verbatim. A trailing segment with no closing marker is flushed at
/// end of input. Line terminators are preserved; a final line without one
/// gains a terminator so reordering cannot join it onto another line.
///
/// Fails on an event line with no usable timestamp, naming the 1-based line
/// number, and on any read or write failure.
pub fn sort_trace<R: BufRead, W: Write>(mut input: R, output: &mut W) -> SortResult<TraceStats> {
    let mut buffer = SegmentBuffer::new();
    let mut stats = TraceStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        stats.total_lines += 1;

        if is_sync(&line) {
            flush_segment(&mut buffer, output, &mut stats)?;
            output.write_all(line.as_bytes())?;
            stats.sync_lines += 1;
        } else {
            let time = timestamp(&line).map_err(|reason| SortError::BadEventLine {
                line_number: stats.total_lines,
                line: line.trim_end_matches(['\r', '\n']).to_string(),
                reason,
            })?;
            stats.event_lines += 1;
            stats.min_timestamp = Some(stats.min_timestamp.map_or(time, |t| t.min(time)));
            stats.max_timestamp = Some(stats.max_timestamp.map_or(time, |t| t.max(time)));
            if !line.ends_with('\n') {
                line.push('\n');
            }
            buffer.push(time, std::mem::take(&mut line));
        }
    }

    flush_segment(&mut buffer, output, &mut stats)?;
    Ok(stats)
}

/// Computes [`TraceStats`] for a trace without producing output.
pub fn scan_trace<R: BufRead>(input: R) -> SortResult<TraceStats> {
    sort_trace(input, &mut std::io::sink())
}

fn flush_segment<W: Write>(
    buffer: &mut SegmentBuffer,
    output: &mut W,
    stats: &mut TraceStats,
) -> SortResult<()> {
    if buffer.is_empty() {
        return Ok(());
    }
    stats.segments += 1;
    stats.max_segment_events = stats.max_segment_events.max(buffer.len());
    for line in buffer.drain_ordered() {
        output.write_all(line.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(input: &str) -> String {
        let mut output = Vec::new();
        sort_trace(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn single_segment_sorts_by_timestamp() {
        assert_eq!(sorted("5 a\n2 b\n9 c\n"), "2 b\n5 a\n9 c\n");
    }

    #[test]
    fn sync_flushes_then_passes_through() {
        assert_eq!(sorted("5 a\n2 b\nsync\n1 c\n"), "2 b\n5 a\nsync\n1 c\n");
    }

    #[test]
    fn empty_segment_before_sync_is_a_no_op() {
        assert_eq!(sorted("sync\nsync 1\n"), "sync\nsync 1\n");
    }

    #[test]
    fn trailing_segment_flushes_without_closing_sync() {
        assert_eq!(sorted("sync 0\n3 late\n1 early\n"), "sync 0\n1 early\n3 late\n");
    }

    #[test]
    fn unterminated_final_line_gains_a_terminator() {
        // Without it the final event could be joined onto the line sorted
        // after it.
        assert_eq!(sorted("5 a\n2 b"), "2 b\n5 a\n");
    }

    #[test]
    fn missing_timestamp_fails_with_line_number() {
        let mut output = Vec::new();
        let err = sort_trace("1 ok\nno numbers here\n".as_bytes(), &mut output).unwrap_err();
        match err {
            SortError::BadEventLine {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "no numbers here");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_output_and_zero_stats() {
        let mut output = Vec::new();
        let stats = sort_trace(&b""[..], &mut output).unwrap();
        assert!(output.is_empty());
        assert_eq!(stats, TraceStats::default());
    }

    #[test]
    fn stats_count_lines_segments_and_timestamp_range() {
        let input = "5 a\n2 b\nsync\n7 c\nsync 1\n";
        let mut output = Vec::new();
        let stats = sort_trace(input.as_bytes(), &mut output).unwrap();
        assert_eq!(stats.total_lines, 5);
        assert_eq!(stats.sync_lines, 2);
        assert_eq!(stats.event_lines, 3);
        assert_eq!(stats.segments, 2);
        assert_eq!(stats.max_segment_events, 2);
        assert_eq!(stats.min_timestamp, Some(2));
        assert_eq!(stats.max_timestamp, Some(7));
    }

    #[test]
    fn scan_matches_sort_stats() {
        let input = "5 a\n2 b\nsync\n1 c\n";
        let mut output = Vec::new();
        let sort_stats = sort_trace(input.as_bytes(), &mut output).unwrap();
        let scan_stats = scan_trace(input.as_bytes()).unwrap();
        assert_eq!(sort_stats, scan_stats);
    }

    #[test]
    fn crlf_terminators_are_preserved() {
        assert_eq!(sorted("5 a\r\n2 b\r\nsync\r\n"), "2 b\r\n5 a\r\nsync\r\n");
    }
}
