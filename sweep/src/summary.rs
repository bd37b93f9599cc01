//! Aggregated results of one driver run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{SweepError, SweepResult};
use crate::runner::InvocationRecord;

/// Aggregated outcome of one sweep-driver run, across all swept programs.
#[derive(Debug, Serialize)]
pub struct SweepSummary {
    /// Lowest core count in the sweep.
    pub min_cores: u32,
    /// Highest core count in the sweep.
    pub max_cores: u32,
    /// Shared log the children appended to.
    pub log_path: PathBuf,
    /// Total invocations recorded.
    pub invocations: u32,
    /// Invocations that did not report success.
    pub failures: u32,
    /// Wall-clock total across invocations, in microseconds.
    pub total_duration_us: u64,
    /// Mean invocation duration in microseconds.
    pub avg_duration_us: u64,
    /// Longest invocation duration in microseconds.
    pub max_duration_us: u64,
    /// Per-invocation outcomes, in execution order.
    pub records: Vec<InvocationRecord>,
}

impl SweepSummary {
    /// Creates an empty summary for a run over `min_cores..=max_cores`.
    #[must_use]
    pub fn new(min_cores: u32, max_cores: u32, log_path: PathBuf) -> Self {
        Self {
            min_cores,
            max_cores,
            log_path,
            invocations: 0,
            failures: 0,
            total_duration_us: 0,
            avg_duration_us: 0,
            max_duration_us: 0,
            records: Vec::new(),
        }
    }

    /// Folds one invocation outcome into the totals.
    pub fn record(&mut self, record: InvocationRecord) {
        self.invocations += 1;
        if !record.success {
            self.failures += 1;
        }
        self.total_duration_us += record.duration_us;
        self.max_duration_us = self.max_duration_us.max(record.duration_us);
        self.records.push(record);
    }

    /// Computes the derived fields once every record is in.
    pub fn finalize(&mut self) {
        if self.invocations > 0 {
            self.avg_duration_us = self.total_duration_us / u64::from(self.invocations);
        }
    }

    /// Whether any recorded invocation failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }
}

/// Writes `summary.json` under `out_dir`.
pub fn write_summary_json(out_dir: &Path, summary: &SweepSummary) -> SweepResult<()> {
    let path = out_dir.join("summary.json");
    let contents =
        serde_json::to_string_pretty(summary).map_err(SweepError::SerializeSummary)?;
    fs::write(&path, contents).map_err(|source| SweepError::WriteSummary { path, source })?;
    Ok(())
}
