//! Information-content store parsed from `ic-*.dat` files.
//!
//! Format: one header line, then `<offset><pos> <count> [ROOT]` per line.
//! Counts on `ROOT` lines are summed into the per-POS total. IC is
//! `-ln(count / total)`; a sense that was never counted gets
//! [`UNBOUNDED_SIMILARITY`].

use std::path::Path;

use tracing::info;
use wordsim_core::constants::UNBOUNDED_SIMILARITY;
use wordsim_core::errors::LexiconError;
use wordsim_core::{FxHashMap, IInformationContent, PartOfSpeech};

/// Counts for one POS family.
#[derive(Debug, Clone, Default)]
struct PosCounts {
    counts: FxHashMap<u32, f64>,
    root_total: f64,
}

/// Frequency counts per (POS family, synset offset).
#[derive(Debug, Clone, Default)]
pub struct IcStore {
    by_family: FxHashMap<PartOfSpeech, PosCounts>,
}

impl IcStore {
    /// Read and parse an IC file.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        if !path.exists() {
            return Err(LexiconError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse(&text, path)?;
        info!(
            path = %path.display(),
            families = store.by_family.len(),
            "loaded information content"
        );
        Ok(store)
    }

    /// Parse IC text. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, LexiconError> {
        let mut store = Self::default();
        for (idx, line) in text.lines().enumerate() {
            // Header: "wnver::<hash>"
            if idx == 0 {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            let malformed = |reason: String| LexiconError::Malformed {
                path: origin.to_path_buf(),
                line: idx + 1,
                reason,
            };
            if fields.len() < 2 {
                return Err(malformed(format!("expected at least 2 fields, found {}", fields.len())));
            }

            let key = fields[0];
            let tag = key
                .chars()
                .last()
                .ok_or_else(|| malformed("empty key".to_string()))?;
            let family = PartOfSpeech::from_tag(tag)
                .map(PartOfSpeech::family)
                .ok_or_else(|| malformed(format!("unknown part of speech {tag:?}")))?;
            let offset: u32 = key[..key.len() - tag.len_utf8()]
                .parse()
                .map_err(|_| malformed(format!("invalid offset {key:?}")))?;
            let value: f64 = fields[1]
                .parse()
                .map_err(|_| malformed(format!("invalid count {:?}", fields[1])))?;

            let entry = store.by_family.entry(family).or_default();
            if fields.len() == 3 && fields[2] == "ROOT" {
                entry.root_total += value;
            }
            if value != 0.0 {
                entry.counts.insert(offset, value);
            }
        }
        Ok(store)
    }

    /// Build a store from explicit counts; mainly for tests and fixtures.
    pub fn from_counts(
        family: PartOfSpeech,
        root_total: f64,
        counts: impl IntoIterator<Item = (u32, f64)>,
    ) -> Self {
        let mut store = Self::default();
        store.insert_family(family, root_total, counts);
        store
    }

    /// Add (or replace) the counts of one POS family.
    pub fn insert_family(
        &mut self,
        family: PartOfSpeech,
        root_total: f64,
        counts: impl IntoIterator<Item = (u32, f64)>,
    ) {
        let counts = counts.into_iter().filter(|(_, v)| *v != 0.0).collect();
        self.by_family
            .insert(family.family(), PosCounts { counts, root_total });
    }

    /// IC of the synset at `offset`, or `None` when the family is not covered.
    pub fn information_content(&self, pos: PartOfSpeech, offset: u32) -> Option<f64> {
        let entry = self.by_family.get(&pos.family())?;
        if entry.root_total <= 0.0 {
            return None;
        }
        let count = entry.counts.get(&offset).copied().unwrap_or(0.0);
        if count == 0.0 {
            return Some(UNBOUNDED_SIMILARITY);
        }
        Some(-(count / entry.root_total).ln())
    }
}

impl IInformationContent for IcStore {
    fn covers(&self, pos: PartOfSpeech) -> bool {
        self.by_family.contains_key(&pos.family())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "wnver::eOS9lXC6GvMWznF1wkZofDdtbBU\n\
                          1740n 128767 ROOT\n\
                          1930n 1000\n\
                          2137n 0\n\
                          2084v 500 ROOT\n\
                          2200v 50\n";

    #[test]
    fn parses_counts_and_roots() {
        let store = IcStore::parse(SAMPLE, Path::new("ic-test.dat")).unwrap();
        assert!(store.covers(PartOfSpeech::Noun));
        assert!(store.covers(PartOfSpeech::Verb));
        assert!(!store.covers(PartOfSpeech::Adjective));
        assert!(!store.covers(PartOfSpeech::AdjectiveSatellite));

        let root = store.information_content(PartOfSpeech::Noun, 1740).unwrap();
        assert!(root.abs() < 1e-12);

        let ic = store.information_content(PartOfSpeech::Noun, 1930).unwrap();
        assert!((ic - (-(1000.0f64 / 128767.0).ln())).abs() < 1e-12);
    }

    #[test]
    fn zero_or_missing_count_is_unbounded() {
        let store = IcStore::parse(SAMPLE, Path::new("ic-test.dat")).unwrap();
        assert_eq!(store.information_content(PartOfSpeech::Noun, 2137), Some(UNBOUNDED_SIMILARITY));
        assert_eq!(store.information_content(PartOfSpeech::Noun, 99), Some(UNBOUNDED_SIMILARITY));
    }

    #[test]
    fn uncovered_family_is_undefined() {
        let store = IcStore::parse(SAMPLE, Path::new("ic-test.dat")).unwrap();
        assert_eq!(store.information_content(PartOfSpeech::Adverb, 1930), None);
    }

    #[test]
    fn malformed_line_reports_position() {
        let err = IcStore::parse("header\n1740n abc\n", Path::new("ic-bad.dat")).unwrap_err();
        match err {
            LexiconError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_missing_file() {
        let err = IcStore::load(Path::new("/nonexistent/ic-brown.dat")).unwrap_err();
        assert!(matches!(err, LexiconError::MissingFile { .. }));
    }
}
