//! wordsim - evaluate word similarity measures against human judgments.
//!
//! # Usage
//!
//! ```bash
//! # Score WS-353 with all six WordNet measures
//! wordsim wordnet --judgments data/ws353.tsv --wordnet-dir dict --ic-file ic-brown.dat
//!
//! # Correlate precomputed scores against the same judgments
//! wordsim correlate --judgments data/ws353.tsv --scores data/cooccurrence.tsv --json
//!
//! # Strip the human scores to get a pair list
//! wordsim pairs --input data/ws353.tsv --output data/ws353_two.tsv
//! ```

mod commands;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use wordsim_core::constants::DEFAULT_CONFIG_FILE;
use wordsim_core::errors::{ConfigError, EvalError};
use wordsim_core::logging::init_tracing;
use wordsim_core::{WordsimConfig, WordsimErrorCode};

use commands::{CorrelateArgs, PairsArgs, ScoreArgs, WordnetArgs};

/// Word similarity evaluation against human judgments.
#[derive(Parser)]
#[command(name = "wordsim", version, about)]
struct Cli {
    /// Config file (default: ./wordsim.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when WORDSIM_LOG is unset, e.g. "info" or "wordsim_analysis=debug"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score judged pairs with WordNet measures and correlate each with the human scores
    Wordnet(WordnetArgs),
    /// Correlate a precomputed score file with human judgments
    Correlate(CorrelateArgs),
    /// Convert a judgment file into a two-column pair list
    Pairs(PairsArgs),
    /// Score a pair list with one WordNet measure and write a score file
    Score(ScoreArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<WordsimConfig, ConfigError> {
    match path {
        Some(path) => WordsimConfig::load(path),
        None => WordsimConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
    }
}

fn run(cli: Cli) -> Result<String, EvalError> {
    let config = load_config(cli.config.as_ref())?;
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.effective_level());
    init_tracing(level);

    match cli.command {
        Command::Wordnet(args) => commands::wordnet(&args, &config),
        Command::Correlate(args) => commands::correlate(&args, &config),
        Command::Pairs(args) => commands::pairs(&args),
        Command::Score(args) => commands::score(&args, &config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error[{}]: {err}", err.error_code());
            ExitCode::FAILURE
        }
    }
}
