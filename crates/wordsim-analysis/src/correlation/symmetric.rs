//! Correlation against a precomputed table of pair scores.
//!
//! The table is keyed by ordered pairs; lookups fall back to the reversed
//! pair, so a score file may list a pair in either order.

use tracing::debug;
use wordsim_core::errors::EvalResult;
use wordsim_core::types::precision::round_to;
use wordsim_core::{FxHashMap, HumanJudgment, WordPair};

use super::correlator::{CoverageSeries, CoverageSummary, ReportPrecision};

#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    scores: FxHashMap<WordPair, f64>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(pair, score)` records, rounding each score to
    /// `precision` digits. A repeated pair keeps its last score.
    pub fn from_records(records: impl IntoIterator<Item = (WordPair, f64)>, precision: u32) -> Self {
        let mut table = Self::new();
        for (pair, score) in records {
            table.insert(pair, round_to(score, precision));
        }
        table
    }

    pub fn insert(&mut self, pair: WordPair, score: f64) {
        self.scores.insert(pair, score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score for `(first, second)`, else for `(second, first)`.
    pub fn lookup(&self, pair: &WordPair) -> Option<f64> {
        self.scores
            .get(pair)
            .or_else(|| self.scores.get(&pair.reversed()))
            .copied()
    }
}

/// Spearman correlation and coverage of `table` against gold judgments.
pub fn correlate_against_gold(
    gold: &[HumanJudgment],
    table: &ScoreTable,
    precision: ReportPrecision,
) -> EvalResult<CoverageSummary> {
    let mut series = CoverageSeries::new();
    for judgment in gold {
        let computed = table.lookup(&judgment.pair);
        if computed.is_none() {
            debug!(pair = %judgment.pair, "no computed score");
        }
        series.record(judgment.score, computed);
    }
    series.summary(precision)
}
