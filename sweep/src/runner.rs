//! Sequential sweep execution with a shared append-mode log.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use serde::Serialize;

use crate::error::{SweepError, SweepResult};
use crate::plan::{CoreSweep, Invocation};

/// Outcome of one benchmark invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationRecord {
    /// Benchmark binary that ran.
    pub program: PathBuf,
    /// Core count passed to it.
    pub cores: u32,
    /// Exit code, if the child exited normally.
    pub exit_code: Option<i32>,
    /// Whether the child reported success.
    pub success: bool,
    /// Wall-clock duration in microseconds.
    pub duration_us: u64,
}

/// Runs sweep invocations one child at a time, appending every child's
/// stdout and stderr to one shared log.
#[derive(Debug)]
pub struct SweepRunner {
    log: File,
    log_path: PathBuf,
}

impl SweepRunner {
    /// Opens `path` in append mode, creating the file and any missing parent
    /// directories. Successive runners (and successive driver runs) keep
    /// growing the same log.
    pub fn append_to(path: impl Into<PathBuf>) -> SweepResult<Self> {
        let log_path = path.into();
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SweepError::OpenLog {
                    path: log_path.clone(),
                    source,
                })?;
            }
        }
        let log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|source| SweepError::OpenLog {
                path: log_path.clone(),
                source,
            })?;
        Ok(Self { log, log_path })
    }

    /// Path of the shared log.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Executes every invocation of `sweep` in plan order, blocking on each
    /// child before starting the next. A child that exits non-zero is
    /// recorded, not propagated; only failure to spawn or wait is an error.
    pub fn run(&mut self, sweep: &CoreSweep) -> SweepResult<Vec<InvocationRecord>> {
        let mut records = Vec::new();
        for invocation in sweep.invocations() {
            records.push(self.run_invocation(&invocation)?);
        }
        Ok(records)
    }

    /// Executes a single invocation, redirecting the child's stdout and
    /// stderr to the shared log.
    pub fn run_invocation(&mut self, invocation: &Invocation) -> SweepResult<InvocationRecord> {
        let stdout = self.clone_log()?;
        let stderr = self.clone_log()?;

        let start = Instant::now();
        let status = invocation
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status()
            .map_err(|source| SweepError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        let duration = start.elapsed();

        Ok(InvocationRecord {
            program: invocation.program.clone(),
            cores: invocation.cores,
            exit_code: status.code(),
            success: status.success(),
            duration_us: duration.as_micros() as u64,
        })
    }

    fn clone_log(&self) -> SweepResult<File> {
        self.log.try_clone().map_err(|source| SweepError::CloneLog {
            path: self.log_path.clone(),
            source,
        })
    }
}
