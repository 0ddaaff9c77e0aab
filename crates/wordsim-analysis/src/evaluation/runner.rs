//! Batch evaluation of a judgment set against a lexical resource.

use serde::Serialize;
use tracing::{debug, info};
use wordsim_core::errors::{EvalError, EvalResult};
use wordsim_core::{HumanJudgment, ILexicalResource, MetricKind, MetricScores, WordPair};

use super::aggregator::{MissingWord, PairAggregator, PairOutcome};
use crate::correlation::{CorrelationReport, CoverageCorrelator, ReportPrecision};

/// Aggregated scores for one judged pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    pub pair: WordPair,
    pub human: f64,
    /// Set when a word had no senses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<MissingWord>,
    pub scores: MetricScores,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub pairs: Vec<PairResult>,
    pub correlation: CorrelationReport,
}

/// Aggregate every judged pair, then correlate each metric's series.
pub fn evaluate_judgments<R>(
    aggregator: &PairAggregator<'_, R>,
    judgments: &[HumanJudgment],
    precision: ReportPrecision,
) -> EvalResult<EvaluationReport>
where
    R: ILexicalResource + ?Sized,
{
    if judgments.is_empty() {
        return Err(EvalError::EmptyInput);
    }

    let mut correlator = CoverageCorrelator::new(aggregator.metrics(), precision);
    let mut pairs = Vec::with_capacity(judgments.len());
    for judgment in judgments {
        let outcome = aggregator.evaluate(&judgment.pair.first, &judgment.pair.second);
        let missing = match outcome {
            PairOutcome::Uncovered(missing) => {
                debug!(pair = %judgment.pair, ?missing, "pair not covered");
                Some(missing)
            }
            PairOutcome::Scored(ref scores) => {
                debug!(pair = %judgment.pair, defined = scores.defined_count(), "pair scored");
                None
            }
        };
        let scores = outcome.scores();
        correlator.record(judgment.score, &scores);
        pairs.push(PairResult {
            pair: judgment.pair.clone(),
            human: judgment.score,
            missing,
            scores,
        });
    }

    let correlation = correlator.report()?;
    for m in &correlation.metrics {
        info!(
            metric = m.metric.name(),
            rho = ?m.summary.correlation.rho(),
            coverage = m.summary.coverage,
            "metric evaluated"
        );
    }
    Ok(EvaluationReport { pairs, correlation })
}

/// Score bare pairs with one metric. Uncovered pairs are returned as `None`.
pub fn score_pairs<R>(
    aggregator: &PairAggregator<'_, R>,
    pairs: &[WordPair],
    metric: MetricKind,
) -> Vec<(WordPair, Option<f64>)>
where
    R: ILexicalResource + ?Sized,
{
    pairs
        .iter()
        .map(|pair| {
            let scores = aggregator.evaluate(&pair.first, &pair.second).scores();
            (pair.clone(), scores.get(metric))
        })
        .collect()
}
