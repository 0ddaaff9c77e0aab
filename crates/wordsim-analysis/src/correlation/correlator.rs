//! Coverage-aware correlation.
//!
//! Every pair counts toward the total; only pairs with a defined score for
//! a metric enter that metric's series. Series stay positionally aligned
//! with the human scores.

use serde::Serialize;
use wordsim_core::constants::{DEFAULT_CORRELATION_PRECISION, DEFAULT_COVERAGE_PRECISION};
use wordsim_core::config::EvaluationConfig;
use wordsim_core::errors::{EvalError, EvalResult};
use wordsim_core::types::precision::round_to;
use wordsim_core::{MetricKind, MetricScores};

use super::spearman::{spearman, Correlation};

/// Decimal digits used when reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPrecision {
    pub correlation: u32,
    pub coverage: u32,
}

impl Default for ReportPrecision {
    fn default() -> Self {
        Self {
            correlation: DEFAULT_CORRELATION_PRECISION,
            coverage: DEFAULT_COVERAGE_PRECISION,
        }
    }
}

impl From<&EvaluationConfig> for ReportPrecision {
    fn from(config: &EvaluationConfig) -> Self {
        Self {
            correlation: config.effective_correlation_precision(),
            coverage: config.effective_coverage_precision(),
        }
    }
}

/// Aligned human/computed series plus the count of all pairs seen.
#[derive(Debug, Clone, Default)]
pub struct CoverageSeries {
    human: Vec<f64>,
    computed: Vec<f64>,
    total: usize,
}

impl CoverageSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pair. `computed` is `None` when the pair is not covered.
    pub fn record(&mut self, human: f64, computed: Option<f64>) {
        self.total += 1;
        if let Some(value) = computed {
            self.human.push(human);
            self.computed.push(value);
        }
    }

    pub fn covered(&self) -> usize {
        self.computed.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn summary(&self, precision: ReportPrecision) -> EvalResult<CoverageSummary> {
        if self.total == 0 {
            return Err(EvalError::EmptyInput);
        }
        let correlation = match spearman(&self.human, &self.computed)? {
            Correlation::Coefficient { rho, p_value } => Correlation::Coefficient {
                rho: round_to(rho, precision.correlation),
                p_value,
            },
            other => other,
        };
        let coverage = round_to(
            self.covered() as f64 / self.total as f64 * 100.0,
            precision.coverage,
        );
        Ok(CoverageSummary {
            correlation,
            coverage,
            covered: self.covered(),
            total: self.total,
        })
    }
}

/// Correlation and coverage for one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub correlation: Correlation,
    /// Percentage of pairs with a defined score, in `[0, 100]`.
    pub coverage: f64,
    pub covered: usize,
    pub total: usize,
}

/// One series per metric, filled pair by pair.
#[derive(Debug, Clone)]
pub struct CoverageCorrelator {
    series: Vec<(MetricKind, CoverageSeries)>,
    precision: ReportPrecision,
}

impl CoverageCorrelator {
    pub fn new(metrics: &[MetricKind], precision: ReportPrecision) -> Self {
        Self {
            series: metrics.iter().map(|&k| (k, CoverageSeries::new())).collect(),
            precision,
        }
    }

    /// Record one judged pair's human score and aggregated metric scores.
    pub fn record(&mut self, human: f64, scores: &MetricScores) {
        for (kind, series) in &mut self.series {
            series.record(human, scores.get(*kind));
        }
    }

    pub fn report(&self) -> EvalResult<CorrelationReport> {
        let metrics = self
            .series
            .iter()
            .map(|(kind, series)| {
                Ok(MetricCorrelation {
                    metric: *kind,
                    summary: series.summary(self.precision)?,
                })
            })
            .collect::<EvalResult<Vec<_>>>()?;
        if metrics.is_empty() {
            return Err(EvalError::EmptyInput);
        }
        Ok(CorrelationReport { metrics })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricCorrelation {
    pub metric: MetricKind,
    #[serde(flatten)]
    pub summary: CoverageSummary,
}

/// Per-metric correlation, in the order metrics were selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub metrics: Vec<MetricCorrelation>,
}

impl CorrelationReport {
    pub fn get(&self, kind: MetricKind) -> Option<&CoverageSummary> {
        self.metrics
            .iter()
            .find(|m| m.metric == kind)
            .map(|m| &m.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(path: Option<f64>, lin: Option<f64>) -> MetricScores {
        let mut s = MetricScores::undefined();
        s.set(MetricKind::Path, path);
        s.set(MetricKind::Lin, lin);
        s
    }

    #[test]
    fn coverage_counts_every_pair() {
        let mut c = CoverageCorrelator::new(
            &[MetricKind::Path, MetricKind::Lin],
            ReportPrecision::default(),
        );
        c.record(9.0, &scores(Some(0.5), Some(0.9)));
        c.record(5.0, &scores(Some(0.25), None));
        c.record(1.0, &scores(Some(0.1), None));
        let report = c.report().unwrap();

        let path = report.get(MetricKind::Path).unwrap();
        assert_eq!(path.coverage, 100.0);
        assert_eq!(path.correlation.rho(), Some(1.0));

        let lin = report.get(MetricKind::Lin).unwrap();
        assert_eq!((lin.covered, lin.total), (1, 3));
        assert_eq!(lin.coverage, 33.33);
        assert_eq!(lin.correlation, Correlation::Degenerate);
    }

    #[test]
    fn uncovered_metric_reports_no_data() {
        let mut c = CoverageCorrelator::new(&[MetricKind::Resnik], ReportPrecision::default());
        c.record(3.0, &MetricScores::undefined());
        let summary = c.report().unwrap().metrics[0].summary;
        assert_eq!(summary.correlation, Correlation::NoData);
        assert_eq!(summary.coverage, 0.0);
    }

    #[test]
    fn no_pairs_is_empty_input() {
        let c = CoverageCorrelator::new(&MetricKind::ALL, ReportPrecision::default());
        assert!(matches!(c.report(), Err(EvalError::EmptyInput)));
    }

    #[test]
    fn coefficient_is_rounded() {
        let mut series = CoverageSeries::new();
        for (h, v) in [(1.0, 0.2), (2.0, 0.1), (3.0, 0.5), (4.0, 0.5), (5.0, 0.5)] {
            series.record(h, Some(v));
        }
        let summary = series.summary(ReportPrecision::default()).unwrap();
        // 7 / sqrt(80)
        assert_eq!(summary.correlation.rho(), Some(0.7826));
    }
}
