//! Word pairs and human similarity judgments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Two surface words, kept in the order they were read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordPair {
    pub first: String,
    pub second: String,
}

impl WordPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The same pair with the words swapped.
    pub fn reversed(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// A word pair scored by human annotators. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanJudgment {
    pub pair: WordPair,
    pub score: f64,
}

impl HumanJudgment {
    pub fn new(pair: WordPair, score: f64) -> Self {
        Self { pair, score }
    }
}
