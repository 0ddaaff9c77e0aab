//! Subcommand implementations. Each returns the text to print on stdout.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{info, warn};
use wordsim_analysis::correlation::{correlate_against_gold, ReportPrecision, ScoreTable};
use wordsim_analysis::evaluation::{evaluate_judgments, score_pairs, PairAggregator};
use wordsim_analysis::tabular::{read_judgments, read_pairs, read_scored, write_pairs, write_scored};
use wordsim_core::config::EvaluationConfig;
use wordsim_core::errors::{ConfigError, EvalError, EvalResult, LexiconError};
use wordsim_core::{MetricKind, WordsimConfig};
use wordsim_lexicon::{IcStore, WordNet};

use crate::output;

#[derive(Args, Debug)]
pub struct LexiconArgs {
    /// WordNet dict/ directory (overrides lexicon.wordnet_dir)
    #[arg(long)]
    pub wordnet_dir: Option<PathBuf>,

    /// Information-content file such as ic-brown.dat (overrides lexicon.ic_file)
    #[arg(long)]
    pub ic_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct WordnetArgs {
    /// Tab-separated judgments: word1, word2, score
    #[arg(long)]
    pub judgments: PathBuf,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Metrics to evaluate, comma-separated (default: all six)
    #[arg(long, value_delimiter = ',')]
    pub metrics: Option<Vec<String>>,

    /// Print per-pair scores alongside the correlations
    #[arg(long)]
    pub pairs: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CorrelateArgs {
    /// Tab-separated judgments: word1, word2, score
    #[arg(long)]
    pub judgments: PathBuf,

    /// Tab-separated computed scores: word1, word2, score
    #[arg(long)]
    pub scores: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PairsArgs {
    /// Tab-separated judgments: word1, word2, score
    #[arg(long)]
    pub input: PathBuf,

    /// Destination for word1, word2 lines
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Tab-separated pairs: word1, word2
    #[arg(long)]
    pub pairs: PathBuf,

    /// Destination for word1, word2, score lines
    #[arg(long)]
    pub output: PathBuf,

    /// Measure to score with
    #[arg(long, default_value = "path")]
    pub metric: String,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Loaded WordNet plus the optional IC store.
struct Lexicon {
    wordnet: WordNet,
    ic: Option<IcStore>,
}

fn load_lexicon(args: &LexiconArgs, config: &WordsimConfig) -> EvalResult<Lexicon> {
    let dir = args
        .wordnet_dir
        .as_ref()
        .or(config.lexicon.wordnet_dir.as_ref())
        .ok_or_else(|| ConfigError::InvalidValue {
            field: "lexicon.wordnet_dir".to_string(),
            reason: "required; pass --wordnet-dir or set it in the config file".to_string(),
        })?;
    let wordnet = WordNet::load(dir)?;

    let ic = match args.ic_file.as_ref().or(config.lexicon.ic_file.as_ref()) {
        Some(path) => match IcStore::load(path) {
            Ok(store) => Some(store),
            Err(LexiconError::MissingFile { path }) => {
                warn!(
                    path = %path.display(),
                    "information-content file not found; resnik, jiang-conrath and lin are undefined"
                );
                None
            }
            Err(e) => return Err(e.into()),
        },
        None => {
            warn!("no information-content file; resnik, jiang-conrath and lin are undefined");
            None
        }
    };
    Ok(Lexicon { wordnet, ic })
}

/// Command-line metric names replace the configured list.
fn selected_metrics(
    cli: Option<&Vec<String>>,
    config: &EvaluationConfig,
) -> Result<Vec<MetricKind>, ConfigError> {
    match cli {
        Some(names) => EvaluationConfig {
            metrics: Some(names.clone()),
            ..config.clone()
        }
        .effective_metrics(),
        None => config.effective_metrics(),
    }
}

pub fn wordnet(args: &WordnetArgs, config: &WordsimConfig) -> EvalResult<String> {
    let metrics = selected_metrics(args.metrics.as_ref(), &config.evaluation)?;
    let judgments = read_judgments(&args.judgments)?;
    let lexicon = load_lexicon(&args.lexicon, config)?;

    let aggregator = PairAggregator::new(&lexicon.wordnet, lexicon.ic.as_ref())
        .with_metrics(metrics)
        .with_score_precision(config.evaluation.effective_score_precision());
    let precision = ReportPrecision::from(&config.evaluation);
    let report = evaluate_judgments(&aggregator, &judgments, precision)?;

    if args.json {
        output::evaluation_json(&args.judgments, &report, args.pairs)
    } else {
        Ok(output::evaluation_text(&report, precision, args.pairs))
    }
}

pub fn correlate(args: &CorrelateArgs, config: &WordsimConfig) -> EvalResult<String> {
    let gold = read_judgments(&args.judgments)?;
    let records = read_scored(&args.scores)?;
    let table = ScoreTable::from_records(records, config.evaluation.effective_score_precision());
    let precision = ReportPrecision::from(&config.evaluation);
    let summary = correlate_against_gold(&gold, &table, precision)?;
    info!(covered = summary.covered, total = summary.total, "correlated score file");

    if args.json {
        output::summary_json(&args.judgments, &args.scores, &summary)
    } else {
        Ok(output::summary_text(&summary, precision))
    }
}

pub fn pairs(args: &PairsArgs) -> EvalResult<String> {
    let judgments = read_judgments(&args.input)?;
    let pairs: Vec<_> = judgments.into_iter().map(|j| j.pair).collect();
    write_pairs(&args.output, &pairs)?;
    Ok(written(pairs.len(), "pairs", &args.output))
}

pub fn score(args: &ScoreArgs, config: &WordsimConfig) -> EvalResult<String> {
    let metric: MetricKind = args.metric.parse().map_err(|e: wordsim_core::types::metric::UnknownMetric| {
        ConfigError::InvalidValue {
            field: "metric".to_string(),
            reason: e.to_string(),
        }
    })?;
    let pairs = read_pairs(&args.pairs)?;
    let lexicon = load_lexicon(&args.lexicon, config)?;

    let precision = config.evaluation.effective_score_precision();
    let aggregator = PairAggregator::new(&lexicon.wordnet, lexicon.ic.as_ref())
        .with_metrics(vec![metric])
        .with_score_precision(precision);
    let scored = score_pairs(&aggregator, &pairs, metric);
    let defined = scored.iter().filter(|(_, s)| s.is_some()).count();
    if defined < scored.len() {
        warn!(skipped = scored.len() - defined, "pairs without a {metric} score omitted");
    }
    write_scored(&args.output, &scored, precision)?;
    Ok(written(defined, "scores", &args.output))
}

fn written(count: usize, what: &str, path: &Path) -> String {
    format!("wrote {count} {what} to {}\n", path.display())
}
