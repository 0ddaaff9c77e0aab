//! Spearman rank correlation on statrs ranks.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::{Data, OrderStatistics, RankTieBreaker};
use wordsim_core::errors::{EvalError, EvalResult};

/// Outcome of correlating one pair of series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Correlation {
    Coefficient {
        rho: f64,
        /// Two-sided, Student's t with `n - 2` degrees of freedom. `None`
        /// below three points.
        p_value: Option<f64>,
    },
    /// No covered pairs.
    NoData,
    /// Too few points, or one side is constant.
    Degenerate,
}

impl Correlation {
    pub fn rho(&self) -> Option<f64> {
        match self {
            Self::Coefficient { rho, .. } => Some(*rho),
            Self::NoData | Self::Degenerate => None,
        }
    }
}

/// Average ranks, 1-based.
fn ranks(values: &[f64]) -> Vec<f64> {
    Data::new(values.to_vec()).ranks(RankTieBreaker::Average)
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut num, mut den_x, mut den_y) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mean_x, b - mean_y);
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }
    if den_x == 0.0 || den_y == 0.0 {
        return None;
    }
    Some((num / (den_x * den_y).sqrt()).clamp(-1.0, 1.0))
}

fn p_value(rho: f64, n: usize) -> Option<f64> {
    if n < 3 {
        return None;
    }
    let df = (n - 2) as f64;
    if (1.0 - rho.abs()) <= f64::EPSILON {
        return Some(0.0);
    }
    let t = rho * (df / (1.0 - rho * rho)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    Some((2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0))
}

/// Spearman's rho between two aligned series.
pub fn spearman(x: &[f64], y: &[f64]) -> EvalResult<Correlation> {
    if x.len() != y.len() {
        return Err(EvalError::SeriesMismatch {
            human: x.len(),
            computed: y.len(),
        });
    }
    match x.len() {
        0 => return Ok(Correlation::NoData),
        1 => return Ok(Correlation::Degenerate),
        _ => {}
    }
    let Some(rho) = pearson(&ranks(x), &ranks(y)) else {
        return Ok(Correlation::Degenerate);
    };
    Ok(Correlation::Coefficient {
        rho,
        p_value: p_value(rho, x.len()),
    })
}
