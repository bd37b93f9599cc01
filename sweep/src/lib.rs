//! Core-count benchmark sweeps for simulator performance runs.
//!
//! The performance suite ships benchmark binaries that take one argument,
//! the number of simulated cores. This crate drives them: it plans one
//! invocation per core count, runs the children strictly one at a time,
//! appends their combined stdout and stderr to a shared log, and aggregates
//! the outcomes into a JSON summary for regression tracking.
//!
//! # Design Principles
//!
//! - **Sequential** - One child at a time; each run blocks until its child exits.
//! - **Argv, not shell** - Children are spawned with explicit argument lists.
//! - **Failures are data** - A child exiting non-zero is recorded, not fatal.

mod error;
mod plan;
mod runner;
mod summary;

pub use error::{SweepError, SweepResult};
pub use plan::{CoreSweep, Invocation};
pub use runner::{InvocationRecord, SweepRunner};
pub use summary::{write_summary_json, SweepSummary};
