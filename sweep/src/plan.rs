//! Sweep planning: which benchmark runs, with which core counts.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{SweepError, SweepResult};

/// A benchmark binary paired with an inclusive range of core counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSweep {
    program: PathBuf,
    cores: RangeInclusive<u32>,
}

impl CoreSweep {
    /// Creates a sweep of `program` over every core count in `cores`.
    pub fn new(program: impl Into<PathBuf>, cores: RangeInclusive<u32>) -> SweepResult<Self> {
        if cores.start() > cores.end() {
            return Err(SweepError::EmptyCoreRange {
                min: *cores.start(),
                max: *cores.end(),
            });
        }
        Ok(Self {
            program: program.into(),
            cores,
        })
    }

    /// The benchmark binary this sweep invokes.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The inclusive core-count range.
    #[must_use]
    pub fn core_counts(&self) -> RangeInclusive<u32> {
        self.cores.clone()
    }

    /// One invocation per core count, lowest first, no values skipped.
    pub fn invocations(&self) -> impl Iterator<Item = Invocation> + '_ {
        self.cores.clone().map(move |cores| Invocation {
            program: self.program.clone(),
            cores,
        })
    }
}

/// A single pending benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Benchmark binary to run.
    pub program: PathBuf,
    /// Core count passed as the sole argument.
    pub cores: u32,
}

impl Invocation {
    /// Builds the child command. The core count is passed as a single textual
    /// argument in an explicit argv; no shell is involved, so paths with
    /// spaces or metacharacters cannot be misparsed.
    #[must_use]
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(self.cores.to_string());
        command
    }

    /// Human-readable command line, echoed by the driver before each run.
    #[must_use]
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program.display(), self.cores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocations_ascend_without_skipping() {
        let sweep = CoreSweep::new("performance/multi-l2-msi", 1..=4).unwrap();
        let cores: Vec<u32> = sweep.invocations().map(|inv| inv.cores).collect();
        assert_eq!(cores, [1, 2, 3, 4]);
    }

    #[test]
    fn single_core_range_yields_one_invocation() {
        let sweep = CoreSweep::new("bench", 3..=3).unwrap();
        assert_eq!(sweep.invocations().count(), 1);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = CoreSweep::new("bench", 4..=1).unwrap_err();
        assert!(matches!(err, SweepError::EmptyCoreRange { min: 4, max: 1 }));
    }

    #[test]
    fn command_passes_the_core_count_as_one_argument() {
        let invocation = Invocation {
            program: PathBuf::from("performance/multi-l3-msi"),
            cores: 4,
        };
        let command = invocation.command();
        assert_eq!(command.get_program(), "performance/multi-l3-msi");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["4"]);
    }

    #[test]
    fn command_line_matches_what_runs() {
        let invocation = Invocation {
            program: PathBuf::from("performance/multi-l2-msi"),
            cores: 2,
        };
        assert_eq!(invocation.command_line(), "performance/multi-l2-msi 2");
    }
}
