//! Output formatting for reports.
//!
//! Supports an aligned plain-text table for the terminal and JSON for
//! scripting. Text output pads numbers to the configured precision.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use wordsim_analysis::correlation::{Correlation, CoverageSummary, MetricCorrelation, ReportPrecision};
use wordsim_analysis::evaluation::{EvaluationReport, MissingWord, PairResult};
use wordsim_core::errors::{EvalError, EvalResult};

/// One metric's correlation, flattened for JSON.
#[derive(Serialize)]
struct JsonSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    metric: Option<&'static str>,
    /// `coefficient`, `no_data`, or `degenerate`.
    state: &'static str,
    rho: Option<f64>,
    p_value: Option<f64>,
    coverage: f64,
    covered: usize,
    total: usize,
}

impl JsonSummary {
    fn new(metric: Option<&'static str>, summary: &CoverageSummary) -> Self {
        let (state, rho, p_value) = match summary.correlation {
            Correlation::Coefficient { rho, p_value } => ("coefficient", Some(rho), p_value),
            Correlation::NoData => ("no_data", None, None),
            Correlation::Degenerate => ("degenerate", None, None),
        };
        Self {
            metric,
            state,
            rho,
            p_value,
            coverage: summary.coverage,
            covered: summary.covered,
            total: summary.total,
        }
    }
}

#[derive(Serialize)]
struct JsonPair<'a> {
    first: &'a str,
    second: &'a str,
    human: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<MissingWord>,
    scores: BTreeMap<&'static str, Option<f64>>,
}

#[derive(Serialize)]
struct JsonEvaluation<'a> {
    judgments: String,
    metrics: Vec<JsonSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pairs: Vec<JsonPair<'a>>,
}

#[derive(Serialize)]
struct JsonCorrelation {
    judgments: String,
    scores: String,
    #[serde(flatten)]
    summary: JsonSummary,
}

fn to_json<T: Serialize>(value: &T) -> EvalResult<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| EvalError::Output(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

pub fn evaluation_json(judgments: &Path, report: &EvaluationReport, with_pairs: bool) -> EvalResult<String> {
    let metrics = report
        .correlation
        .metrics
        .iter()
        .map(|m| JsonSummary::new(Some(m.metric.name()), &m.summary))
        .collect();
    let pairs = if with_pairs {
        report
            .pairs
            .iter()
            .map(|p| JsonPair {
                first: &p.pair.first,
                second: &p.pair.second,
                human: p.human,
                missing: p.missing,
                scores: report
                    .correlation
                    .metrics
                    .iter()
                    .map(|m| (m.metric.name(), p.scores.get(m.metric)))
                    .collect(),
            })
            .collect()
    } else {
        Vec::new()
    };
    to_json(&JsonEvaluation {
        judgments: judgments.display().to_string(),
        metrics,
        pairs,
    })
}

pub fn summary_json(judgments: &Path, scores: &Path, summary: &CoverageSummary) -> EvalResult<String> {
    to_json(&JsonCorrelation {
        judgments: judgments.display().to_string(),
        scores: scores.display().to_string(),
        summary: JsonSummary::new(None, summary),
    })
}

fn correlation_cell(correlation: &Correlation, digits: usize) -> String {
    match correlation {
        Correlation::Coefficient { rho, .. } => format!("{rho:.digits$}"),
        Correlation::NoData => "no data".to_string(),
        Correlation::Degenerate => "undefined".to_string(),
    }
}

fn summary_row(label: &str, summary: &CoverageSummary, precision: ReportPrecision) -> String {
    format!(
        "{label:<26} {:>10} {:>8}%  ({}/{})\n",
        correlation_cell(&summary.correlation, precision.correlation as usize),
        format!("{:.*}", precision.coverage as usize, summary.coverage),
        summary.covered,
        summary.total,
    )
}

fn header() -> String {
    format!("{:<26} {:>10} {:>9}\n", "metric", "rho", "coverage")
}

fn pair_row(pair: &PairResult, metrics: &[MetricCorrelation]) -> String {
    let mut row = format!("{}\t{}\t{}", pair.pair.first, pair.pair.second, pair.human);
    for m in metrics {
        match pair.scores.get(m.metric) {
            Some(v) => row.push_str(&format!("\t{v}")),
            None => row.push_str("\t-"),
        }
    }
    row.push('\n');
    row
}

pub fn evaluation_text(report: &EvaluationReport, precision: ReportPrecision, with_pairs: bool) -> String {
    let mut out = String::new();
    if with_pairs {
        for p in &report.pairs {
            out.push_str(&pair_row(p, &report.correlation.metrics));
        }
        out.push('\n');
    }
    out.push_str(&header());
    for m in &report.correlation.metrics {
        out.push_str(&summary_row(m.metric.name(), &m.summary, precision));
    }
    out
}

pub fn summary_text(summary: &CoverageSummary, precision: ReportPrecision) -> String {
    let mut out = header();
    out.push_str(&summary_row("scores", summary, precision));
    out
}

#[cfg(test)]
mod tests {
    use wordsim_analysis::correlation::CorrelationReport;
    use wordsim_core::{MetricKind, WordPair};

    use super::*;

    fn summary(correlation: Correlation) -> CoverageSummary {
        CoverageSummary {
            correlation,
            coverage: 85.7,
            covered: 6,
            total: 7,
        }
    }

    #[test]
    fn text_pads_to_precision() {
        let s = summary(Correlation::Coefficient { rho: 0.75, p_value: Some(0.08) });
        let text = summary_text(&s, ReportPrecision::default());
        assert!(text.contains("0.7500"), "{text}");
        assert!(text.contains("85.70%"), "{text}");
        assert!(text.contains("(6/7)"), "{text}");
    }

    #[test]
    fn missing_correlation_is_spelled_out() {
        let text = summary_text(&summary(Correlation::NoData), ReportPrecision::default());
        assert!(text.contains("no data"));
        let text = summary_text(&summary(Correlation::Degenerate), ReportPrecision::default());
        assert!(text.contains("undefined"));
    }

    #[test]
    fn json_flattens_the_state() {
        let s = summary(Correlation::NoData);
        let out = summary_json(Path::new("a.tsv"), Path::new("b.tsv"), &s).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["state"], "no_data");
        assert!(value["rho"].is_null());
        assert_eq!(value["judgments"], "a.tsv");
    }

    #[test]
    fn pair_rows_precede_the_metric_table() {
        let mut scores = wordsim_core::MetricScores::undefined();
        scores.set(MetricKind::Path, Some(0.33));
        let report = EvaluationReport {
            pairs: vec![PairResult {
                pair: WordPair::new("cat", "dog"),
                human: 7.5,
                missing: None,
                scores,
            }],
            correlation: CorrelationReport {
                metrics: vec![
                    MetricCorrelation { metric: MetricKind::Path, summary: summary(Correlation::Degenerate) },
                    MetricCorrelation { metric: MetricKind::Lin, summary: summary(Correlation::NoData) },
                ],
            },
        };
        let text = evaluation_text(&report, ReportPrecision::default(), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "cat\tdog\t7.5\t0.33\t-");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("metric"));
        assert_eq!(lines.len(), 5);
    }
}
