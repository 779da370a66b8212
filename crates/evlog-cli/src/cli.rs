//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use evlog_core::EventCategory;

/// Event log export and tail tool.
///
/// Pulls access or admin event records from the analytics backend and
/// writes them as a time-ordered line stream, either as a one-shot bounded
/// export or as a continuous tail.
#[derive(Debug, Parser)]
#[command(name = "evlog", version, about, long_about = None)]
pub struct Cli {
    /// Event category to fetch (access or admin).
    pub log_type: EventCategory,

    /// Follow the log, polling until interrupted.
    #[arg(short = 'f', long)]
    pub tail: bool,

    /// Fetch window start, in seconds since epoch (bounded exports only).
    #[arg(short, long)]
    pub start: Option<i64>,

    /// Fetch window end, in seconds since epoch (bounded exports only).
    #[arg(short, long)]
    pub end: Option<i64>,

    /// Suppress the end-of-run summary.
    #[arg(short, long)]
    pub batch: bool,

    /// Write log lines to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
