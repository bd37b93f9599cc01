use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sweep::{write_summary_json, CoreSweep, InvocationRecord, SweepRunner, SweepSummary};

/// Benchmarks swept when no programs are given on the command line.
const DEFAULT_PROGRAMS: [&str; 2] = ["performance/multi-l2-msi", "performance/multi-l3-msi"];

#[derive(Parser)]
#[command(
    name = "simperf-sweep",
    version,
    about = "core-count sweep driver for the simulator performance benchmarks"
)]
struct Cli {
    /// Benchmark binaries to sweep, in order; defaults to the two
    /// multi-level coherence benchmarks.
    programs: Vec<PathBuf>,
    /// Lowest core count.
    #[arg(long, default_value_t = 1)]
    min_cores: u32,
    /// Highest core count (inclusive).
    #[arg(long, default_value_t = 4)]
    max_cores: u32,
    /// Shared log that receives child stdout and stderr, append-mode.
    #[arg(long, default_value = "performance/mul.log")]
    log: PathBuf,
    /// Output directory for summary.json.
    #[arg(long, default_value = "target/sweep")]
    out_dir: PathBuf,
    /// Exit non-zero if any invocation fails.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let programs: Vec<PathBuf> = if cli.programs.is_empty() {
        DEFAULT_PROGRAMS.iter().map(PathBuf::from).collect()
    } else {
        cli.programs.clone()
    };

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir {}", cli.out_dir.display()))?;

    let mut runner = SweepRunner::append_to(&cli.log)
        .with_context(|| format!("open sweep log {}", cli.log.display()))?;
    let mut summary = SweepSummary::new(cli.min_cores, cli.max_cores, cli.log.clone());

    for program in &programs {
        let sweep = CoreSweep::new(program, cli.min_cores..=cli.max_cores)
            .with_context(|| format!("plan sweep for {}", program.display()))?;
        for invocation in sweep.invocations() {
            println!("{}", invocation.command_line());
            let record = runner
                .run_invocation(&invocation)
                .with_context(|| format!("run {}", invocation.command_line()))?;
            print_outcome(&record);
            summary.record(record);
        }
    }

    summary.finalize();
    write_summary_json(&cli.out_dir, &summary).context("write sweep summary")?;

    if cli.strict && summary.has_failures() {
        anyhow::bail!(
            "{} of {} invocations failed (see {})",
            summary.failures,
            summary.invocations,
            cli.log.display()
        );
    }

    Ok(())
}

fn print_outcome(record: &InvocationRecord) {
    match record.exit_code {
        Some(code) if record.success => println!("  exit {code} ({} us)", record.duration_us),
        Some(code) => println!("  exit {code} FAILED ({} us)", record.duration_us),
        None => println!("  terminated by signal ({} us)", record.duration_us),
    }
}
