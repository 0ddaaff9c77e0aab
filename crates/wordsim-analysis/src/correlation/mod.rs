//! Rank correlation between human judgments and computed scores.

pub mod correlator;
pub mod spearman;
pub mod symmetric;

pub use correlator::{
    CorrelationReport, CoverageCorrelator, CoverageSeries, CoverageSummary, MetricCorrelation,
    ReportPrecision,
};
pub use spearman::{spearman, Correlation};
pub use symmetric::{correlate_against_gold, ScoreTable};
