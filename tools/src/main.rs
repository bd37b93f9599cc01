use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use simperf_tools::{format_stats_text, StatsReport};
use trace::{scan_trace, sort_trace, TraceStats};

#[derive(Parser)]
#[command(
    name = "simperf-tools",
    version,
    about = "simulator trace sorting and inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Time-sort trace segments between sync markers.
    Sort {
        /// Path to the raw trace.
        #[arg(default_value = "dtrace")]
        trace_path: PathBuf,
        /// Output path for the sorted trace.
        #[arg(long, default_value = "sort_dtrace")]
        out: PathBuf,
    },
    /// Summarize a trace, or every trace in a directory.
    Stats {
        /// Path to a trace file or a directory of traces.
        trace_path: PathBuf,
        /// Optional glob filter when summarizing a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatsFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Sort { trace_path, out } => {
            let input = File::open(&trace_path)
                .with_context(|| format!("open trace {}", trace_path.display()))?;
            let output = File::create(&out)
                .with_context(|| format!("create sorted trace {}", out.display()))?;
            let mut writer = BufWriter::new(output);
            let stats = sort_trace(BufReader::new(input), &mut writer)
                .with_context(|| format!("sort trace {}", trace_path.display()))?;
            writer
                .flush()
                .with_context(|| format!("flush sorted trace {}", out.display()))?;
            println!("{} -> {}", trace_path.display(), out.display());
            println!("{}", format_stats_text(&stats));
        }
        Command::Stats {
            trace_path,
            glob,
            format,
        } => {
            if trace_path.is_dir() {
                let entries = collect_trace_entries(&trace_path, glob.as_deref())?;
                for path in entries {
                    let stats = scan_file(&path)?;
                    println!("== {} ==", path.display());
                    print_stats(&stats, format)?;
                }
            } else {
                let stats = scan_file(&trace_path)?;
                print_stats(&stats, format)?;
            }
        }
    }
    Ok(())
}

fn scan_file(path: &Path) -> Result<TraceStats> {
    let file = File::open(path).with_context(|| format!("open trace {}", path.display()))?;
    scan_trace(BufReader::new(file)).with_context(|| format!("scan trace {}", path.display()))
}

fn print_stats(stats: &TraceStats, format: StatsFormat) -> Result<()> {
    match format {
        StatsFormat::Text => println!("{}", format_stats_text(stats)),
        StatsFormat::Json => {
            let report = StatsReport::from(*stats);
            let json = serde_json::to_string_pretty(&report).context("serialize stats")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn collect_trace_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        entries.push(path);
    }
    entries.sort();
    Ok(entries)
}
