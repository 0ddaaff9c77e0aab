//! Tab-separated record readers.
//!
//! Lines are trimmed and case-folded before splitting on tabs. Blank lines
//! are skipped. Any other line with the wrong field count, or an unparsable
//! or non-finite score, fails the whole read with its 1-based line number.

use std::path::Path;

use tracing::debug;
use wordsim_core::errors::InputError;
use wordsim_core::{HumanJudgment, WordPair};

fn read_text(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Split every non-blank line into exactly `expected` fields.
fn records<'a>(
    text: &'a str,
    origin: &'a Path,
    expected: usize,
) -> impl Iterator<Item = Result<(usize, Vec<String>), InputError>> + 'a {
    text.lines().enumerate().filter_map(move |(idx, raw)| {
        let line = raw.trim().to_lowercase();
        if line.is_empty() {
            return None;
        }
        let fields: Vec<String> = line.split('\t').map(str::to_string).collect();
        if fields.len() != expected {
            return Some(Err(InputError::MalformedRecord {
                path: origin.to_path_buf(),
                line: idx + 1,
                expected,
                found: fields.len(),
            }));
        }
        Some(Ok((idx + 1, fields)))
    })
}

fn parse_score(value: &str, origin: &Path, line: usize) -> Result<f64, InputError> {
    match value.trim().parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => Err(InputError::InvalidScore {
            path: origin.to_path_buf(),
            line,
            value: value.to_string(),
        }),
    }
}

fn pair_from(fields: &mut Vec<String>) -> WordPair {
    let second = fields.swap_remove(1);
    let first = fields.swap_remove(0);
    WordPair::new(first, second)
}

/// Parse `word1\tword2\tscore` judgments. At least one record is required.
pub fn parse_judgments(text: &str, origin: &Path) -> Result<Vec<HumanJudgment>, InputError> {
    let judgments = parse_scored(text, origin)?
        .into_iter()
        .map(|(pair, score)| HumanJudgment::new(pair, score))
        .collect::<Vec<_>>();
    if judgments.is_empty() {
        return Err(InputError::EmptyInput {
            path: origin.to_path_buf(),
        });
    }
    Ok(judgments)
}

/// Parse `word1\tword2\tscore` computed-score records. May be empty.
pub fn parse_scored(text: &str, origin: &Path) -> Result<Vec<(WordPair, f64)>, InputError> {
    records(text, origin, 3)
        .map(|record| {
            let (line, mut fields) = record?;
            let score = parse_score(&fields[2], origin, line)?;
            Ok((pair_from(&mut fields), score))
        })
        .collect()
}

/// Parse `word1\tword2` pairs. At least one record is required.
pub fn parse_pairs(text: &str, origin: &Path) -> Result<Vec<WordPair>, InputError> {
    let pairs = records(text, origin, 2)
        .map(|record| record.map(|(_, mut fields)| pair_from(&mut fields)))
        .collect::<Result<Vec<_>, _>>()?;
    if pairs.is_empty() {
        return Err(InputError::EmptyInput {
            path: origin.to_path_buf(),
        });
    }
    Ok(pairs)
}

pub fn read_judgments(path: &Path) -> Result<Vec<HumanJudgment>, InputError> {
    let judgments = parse_judgments(&read_text(path)?, path)?;
    debug!(path = %path.display(), count = judgments.len(), "read judgments");
    Ok(judgments)
}

pub fn read_scored(path: &Path) -> Result<Vec<(WordPair, f64)>, InputError> {
    let records = parse_scored(&read_text(path)?, path)?;
    debug!(path = %path.display(), count = records.len(), "read computed scores");
    Ok(records)
}

pub fn read_pairs(path: &Path) -> Result<Vec<WordPair>, InputError> {
    let pairs = parse_pairs(&read_text(path)?, path)?;
    debug!(path = %path.display(), count = pairs.len(), "read pairs");
    Ok(pairs)
}
