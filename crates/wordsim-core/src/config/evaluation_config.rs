//! Evaluation settings: which metrics to run and reporting precision.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CORRELATION_PRECISION, DEFAULT_COVERAGE_PRECISION, DEFAULT_SCORE_PRECISION,
    MAX_PRECISION,
};
use crate::errors::ConfigError;
use crate::types::metric::MetricKind;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Metric names to evaluate, in report order. Default: all six.
    pub metrics: Option<Vec<String>>,
    /// Decimal digits for similarity scores. Default: 2.
    pub score_precision: Option<u32>,
    /// Decimal digits for correlation coefficients. Default: 4.
    pub correlation_precision: Option<u32>,
    /// Decimal digits for coverage percentages. Default: 2.
    pub coverage_precision: Option<u32>,
}

impl EvaluationConfig {
    /// Parsed metric list, duplicates removed, first occurrence kept.
    pub fn effective_metrics(&self) -> Result<Vec<MetricKind>, ConfigError> {
        let Some(names) = &self.metrics else {
            return Ok(MetricKind::ALL.to_vec());
        };
        let mut kinds = Vec::with_capacity(names.len());
        for name in names {
            let kind: MetricKind = name.parse().map_err(|e: crate::types::metric::UnknownMetric| {
                ConfigError::InvalidValue {
                    field: "evaluation.metrics".to_string(),
                    reason: e.to_string(),
                }
            })?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        if kinds.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "evaluation.metrics".to_string(),
                reason: "at least one metric is required".to_string(),
            });
        }
        Ok(kinds)
    }

    pub fn effective_score_precision(&self) -> u32 {
        self.score_precision.unwrap_or(DEFAULT_SCORE_PRECISION)
    }

    pub fn effective_correlation_precision(&self) -> u32 {
        self.correlation_precision.unwrap_or(DEFAULT_CORRELATION_PRECISION)
    }

    pub fn effective_coverage_precision(&self) -> u32 {
        self.coverage_precision.unwrap_or(DEFAULT_COVERAGE_PRECISION)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.effective_metrics()?;
        for (field, value) in [
            ("evaluation.score_precision", self.score_precision),
            ("evaluation.correlation_precision", self.correlation_precision),
            ("evaluation.coverage_precision", self.coverage_precision),
        ] {
            if let Some(v) = value {
                if v > MAX_PRECISION {
                    return Err(ConfigError::InvalidValue {
                        field: field.to_string(),
                        reason: format!("{v} exceeds the maximum of {MAX_PRECISION}"),
                    });
                }
            }
        }
        Ok(())
    }
}
