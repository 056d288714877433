//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "stable-match",
    version,
    about = "Compute the proposer-optimal stable matching of two preference files"
)]
pub struct Cli {
    /// Proposer preference file (n, then one line of n receivers per proposer).
    #[arg(value_name = "PROPOSERS")]
    pub proposers: PathBuf,

    /// Receiver preference file (n, then one line of n proposers per receiver).
    #[arg(value_name = "RECEIVERS")]
    pub receivers: PathBuf,

    /// Output file, one "proposer receiver" line per proposer.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Cap the free-set queue at n*n + 5 entries.
    #[arg(long = "bounded-queue")]
    pub bounded_queue: bool,

    /// Print the run receipt (counts and matching root) to stdout.
    #[arg(long)]
    pub receipt: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
