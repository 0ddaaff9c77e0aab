//! In-memory construction of small WordNet graphs for tests and benches.

use wordsim_core::PartOfSpeech;

use super::parser::{RawIndexEntry, RawLexicon, RawSynset};
use super::WordNet;

/// Builds a [`WordNet`] without a `dict/` directory.
///
/// Offsets are assigned sequentially across all families, starting at 1. Each
/// lemma's sense order follows insertion order.
#[derive(Debug, Default)]
pub struct WordNetBuilder {
    raw: RawLexicon,
    next_offset: u32,
}

impl WordNetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a synset with hypernyms given as offsets previously returned by
    /// this builder. Returns the new synset's offset.
    pub fn synset(&mut self, pos: PartOfSpeech, lemmas: &[&str], hypernyms: &[u32]) -> u32 {
        self.next_offset += 1;
        let offset = self.next_offset;
        let family = pos.family();

        for lemma in lemmas {
            let key = lemma.to_lowercase();
            match self
                .raw
                .index
                .iter_mut()
                .find(|e| e.lemma == key && e.family == family)
            {
                Some(entry) => entry.offsets.push(offset),
                None => self.raw.index.push(RawIndexEntry {
                    lemma: key,
                    family,
                    offsets: vec![offset],
                }),
            }
        }

        self.raw.synsets.push(RawSynset {
            offset,
            pos,
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
            hypernyms: hypernyms.iter().map(|&h| (family, h)).collect(),
        });
        offset
    }

    /// Register an irregular form, e.g. `mice -> mouse`.
    pub fn exception(&mut self, pos: PartOfSpeech, inflected: &str, base: &str) -> &mut Self {
        self.raw
            .exceptions
            .entry(pos.family())
            .or_default()
            .entry(inflected.to_string())
            .or_default()
            .push(base.to_string());
        self
    }

    pub fn build(self) -> WordNet {
        WordNet::assemble(self.raw)
    }
}
