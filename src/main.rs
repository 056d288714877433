//! stable-match - Binary Entry Point
//!
//! ```text
//! stable-match <PROPOSERS> <RECEIVERS> <OUTPUT>
//! ```
//!
//! Exit codes: 1 usage, 2 input file not found, 3 I/O or invalid input,
//! 4 non-integer token, 5 engine failure.

use std::io::ErrorKind;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use stable_match::engine::{EngineConfig, MatchingEngine};
use stable_match::error::{EngineError, FormatError};
use stable_match::format::{load_profile, write_assignments_file};
use stable_match::logging::{init_logging, LogConfig, LogFormat};

mod cli;

use crate::cli::{Cli, LogFormatArg};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let code = if error.use_stderr() { 1 } else { 0 };
            // Exit status is what callers check; a closed stderr is ignored.
            let _ = error.print();
            return ExitCode::from(code);
        }
    };

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::from(1);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let profile = load_profile(&cli.proposers, &cli.receivers)?;

    let config = if cli.bounded_queue {
        EngineConfig::with_static_bound(profile.group_size())
    } else {
        EngineConfig::default()
    };
    let result = MatchingEngine::with_config(config).solve(&profile)?;

    write_assignments_file(&cli.output, &result.assignments)?;

    let receipt = result.receipt()?;
    info!(
        n = profile.group_size(),
        proposals = result.proposals,
        unmatched = receipt.unmatched,
        root = %receipt.matching_root_hex(),
        "matching written to {}",
        cli.output.display()
    );

    if cli.receipt {
        let satisfaction = result.satisfaction();
        println!("group size:     {}", receipt.group_size);
        println!("proposals:      {}", receipt.proposals);
        println!("rejections:     {}", receipt.rejections);
        println!("unmatched:      {}", receipt.unmatched);
        if let (Some(p), Some(r)) = (
            satisfaction.mean_proposer_rank(),
            satisfaction.mean_receiver_rank(),
        ) {
            println!("mean rank:      proposers {p}, receivers {r}");
        }
        println!("matching root:  {}", receipt.matching_root_hex());
    }

    Ok(())
}

/// Everything `run` can fail with, mapped to process exit codes.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Format(e) if e.io_kind() == Some(ErrorKind::NotFound) => 2,
            CliError::Format(FormatError::InvalidInteger { .. }) => 4,
            CliError::Format(_) => 3,
            CliError::Engine(_) => 5,
        }
    }
}
