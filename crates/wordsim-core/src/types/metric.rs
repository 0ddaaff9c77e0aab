//! Similarity metric kinds and per-pair metric results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six WordNet similarity measures evaluated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKind {
    #[serde(rename = "path_similarity")]
    Path,
    #[serde(rename = "wu_palmer_similarity")]
    WuPalmer,
    #[serde(rename = "leacock_chodorow_similarity")]
    LeacockChodorow,
    #[serde(rename = "resnik_similarity")]
    Resnik,
    #[serde(rename = "jiang_conrath_similarity")]
    JiangConrath,
    #[serde(rename = "lin_similarity")]
    Lin,
}

impl MetricKind {
    pub const COUNT: usize = 6;

    pub const ALL: [MetricKind; Self::COUNT] = [
        MetricKind::Path,
        MetricKind::WuPalmer,
        MetricKind::LeacockChodorow,
        MetricKind::Resnik,
        MetricKind::JiangConrath,
        MetricKind::Lin,
    ];

    /// Report name, e.g. `wu_palmer_similarity`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Path => "path_similarity",
            Self::WuPalmer => "wu_palmer_similarity",
            Self::LeacockChodorow => "leacock_chodorow_similarity",
            Self::Resnik => "resnik_similarity",
            Self::JiangConrath => "jiang_conrath_similarity",
            Self::Lin => "lin_similarity",
        }
    }

    /// Dense index into `MetricKind::ALL`.
    pub fn index(self) -> usize {
        match self {
            Self::Path => 0,
            Self::WuPalmer => 1,
            Self::LeacockChodorow => 2,
            Self::Resnik => 3,
            Self::JiangConrath => 4,
            Self::Lin => 5,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised metric name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric {0:?} (expected one of path, wup, lch, res, jcn, lin)")]
pub struct UnknownMetric(pub String);

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let kind = match normalized.as_str() {
            "path" | "path_similarity" => Self::Path,
            "wup" | "wu_palmer" | "wu_palmer_similarity" => Self::WuPalmer,
            "lch" | "leacock_chodorow" | "leacock_chodorow_similarity" => Self::LeacockChodorow,
            "res" | "resnik" | "resnik_similarity" => Self::Resnik,
            "jcn" | "jiang_conrath" | "jiang_conrath_similarity" => Self::JiangConrath,
            "lin" | "lin_similarity" => Self::Lin,
            _ => return Err(UnknownMetric(s.to_string())),
        };
        Ok(kind)
    }
}

/// Best value per metric for one word pair; `None` means undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricScores([Option<f64>; MetricKind::COUNT]);

impl MetricScores {
    /// All metrics undefined.
    pub fn undefined() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        self.0[kind.index()]
    }

    pub fn set(&mut self, kind: MetricKind, value: Option<f64>) {
        self.0[kind.index()] = value;
    }

    /// Metrics in canonical order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, Option<f64>)> + '_ {
        MetricKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }

    pub fn defined_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }
}
