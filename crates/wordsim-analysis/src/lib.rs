//! # wordsim-analysis
//!
//! Evaluation engine for wordsim.
//!
//! - `evaluation` - the metric applicability gate, the pairwise sense
//!   similarity aggregator, and the runner that feeds judgments through them.
//! - `correlation` - Spearman rank correlation with coverage accounting, and
//!   symmetric-lookup correlation against precomputed score tables.
//! - `tabular` - tab-separated judgment, pair, and score files.

pub mod correlation;
pub mod evaluation;
pub mod tabular;

pub use correlation::{
    correlate_against_gold, Correlation, CorrelationReport, CoverageCorrelator, CoverageSummary,
    ReportPrecision, ScoreTable,
};
pub use evaluation::{
    evaluate_judgments, ApplicabilityGate, EvaluationReport, PairAggregator, PairOutcome,
    PreconditionFailure,
};
