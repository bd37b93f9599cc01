//! Sorting and inspection tools for simulator trace logs.
//!
//! This crate backs the `simperf-tools` binary:
//!
//! - Time-sort a raw `dtrace` into per-segment timestamp order
//! - Summarize one trace, or every trace in a directory
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the performance workflow, not afterthoughts.
//! - **Human-readable output** - Plain text by default, JSON when a pipeline wants it.

use std::fmt::Write;

use serde::Serialize;
use trace::TraceStats;

/// Serializable view of [`TraceStats`] for JSON output.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub total_lines: usize,
    pub sync_lines: usize,
    pub event_lines: usize,
    pub segments: usize,
    pub max_segment_events: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_timestamp: Option<u64>,
}

impl From<TraceStats> for StatsReport {
    fn from(stats: TraceStats) -> Self {
        Self {
            total_lines: stats.total_lines,
            sync_lines: stats.sync_lines,
            event_lines: stats.event_lines,
            segments: stats.segments,
            max_segment_events: stats.max_segment_events,
            min_timestamp: stats.min_timestamp,
            max_timestamp: stats.max_timestamp,
        }
    }
}

/// Formats stats as the multi-line text block the CLI prints by default.
#[must_use]
pub fn format_stats_text(stats: &TraceStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "lines: {} ({} events, {} sync)",
        stats.total_lines, stats.event_lines, stats.sync_lines
    );
    let _ = writeln!(
        out,
        "segments: {} (largest {} events)",
        stats.segments, stats.max_segment_events
    );
    match (stats.min_timestamp, stats.max_timestamp) {
        (Some(min), Some(max)) => {
            let _ = write!(out, "timestamps: {min}..{max}");
        }
        _ => {
            let _ = write!(out, "timestamps: none");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> TraceStats {
        TraceStats {
            total_lines: 5,
            sync_lines: 2,
            event_lines: 3,
            segments: 2,
            max_segment_events: 2,
            min_timestamp: Some(2),
            max_timestamp: Some(7),
        }
    }

    #[test]
    fn text_format_mentions_every_counter() {
        let text = format_stats_text(&sample_stats());
        assert!(text.contains("lines: 5 (3 events, 2 sync)"));
        assert!(text.contains("segments: 2 (largest 2 events)"));
        assert!(text.contains("timestamps: 2..7"));
    }

    #[test]
    fn text_format_for_an_empty_trace() {
        let text = format_stats_text(&TraceStats::default());
        assert!(text.contains("lines: 0"));
        assert!(text.contains("timestamps: none"));
    }

    #[test]
    fn report_omits_absent_timestamps_in_json() {
        let report = StatsReport::from(TraceStats::default());
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("min_timestamp"));

        let report = StatsReport::from(sample_stats());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"min_timestamp\":2"));
        assert!(json.contains("\"max_timestamp\":7"));
    }
}
