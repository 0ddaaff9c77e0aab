//! Pairwise evaluation: gate, aggregator, and the batch runner.

pub mod aggregator;
pub mod gate;
pub mod runner;

pub use aggregator::{MissingWord, PairAggregator, PairOutcome};
pub use gate::{ApplicabilityGate, MetricRule, PreconditionFailure, APPLICABILITY};
pub use runner::{evaluate_judgments, score_pairs, EvaluationReport, PairResult};
