//! Error types for sweep planning and execution.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Errors that can occur while planning or executing a sweep.
#[derive(Debug)]
#[non_exhaustive]
pub enum SweepError {
    /// The core-count range has `min > max`.
    EmptyCoreRange { min: u32, max: u32 },

    /// The shared log could not be opened for appending.
    OpenLog { path: PathBuf, source: io::Error },

    /// The log handle could not be duplicated for child redirection.
    CloneLog { path: PathBuf, source: io::Error },

    /// A benchmark binary could not be spawned or waited on.
    Spawn { program: PathBuf, source: io::Error },

    /// The run summary could not be serialized.
    SerializeSummary(serde_json::Error),

    /// The run summary could not be written.
    WriteSummary { path: PathBuf, source: io::Error },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCoreRange { min, max } => {
                write!(f, "empty core range: min {min} > max {max}")
            }
            Self::OpenLog { path, source } => {
                write!(f, "open log {} for appending: {source}", path.display())
            }
            Self::CloneLog { path, source } => {
                write!(f, "duplicate log handle {}: {source}", path.display())
            }
            Self::Spawn { program, source } => {
                write!(f, "spawn benchmark {}: {source}", program.display())
            }
            Self::SerializeSummary(source) => {
                write!(f, "serialize sweep summary: {source}")
            }
            Self::WriteSummary { path, source } => {
                write!(f, "write sweep summary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyCoreRange { .. } => None,
            Self::OpenLog { source, .. }
            | Self::CloneLog { source, .. }
            | Self::Spawn { source, .. }
            | Self::WriteSummary { source, .. } => Some(source),
            Self::SerializeSummary(source) => Some(source),
        }
    }
}
