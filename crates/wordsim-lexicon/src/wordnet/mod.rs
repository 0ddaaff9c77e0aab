//! WordNet database adapter.
//!
//! Loads a WordNet 3.x `dict/` directory once into memory and answers
//! candidate and similarity queries through [`ILexicalResource`].

mod builder;
mod measures;
pub mod morphy;
pub mod parser;
pub mod taxonomy;

use std::path::Path;

use tracing::{info, warn};
use wordsim_core::errors::LexiconError;
use wordsim_core::{
    FxHashMap, ILexicalResource, MetricKind, PartOfSpeech, SenseCandidate, SenseCandidates,
    SenseId,
};

use crate::information_content::IcStore;

pub use builder::WordNetBuilder;
use morphy::ExceptionMap;
use parser::RawLexicon;
use taxonomy::Taxonomy;

/// A loaded synset.
#[derive(Debug, Clone, PartialEq)]
pub struct Synset {
    pub offset: u32,
    pub pos: PartOfSpeech,
    pub lemmas: Vec<String>,
    /// `lemma.pos.NN`, e.g. `dog.n.01`.
    pub name: String,
}

pub struct WordNet {
    synsets: Vec<Synset>,
    by_offset: FxHashMap<(PartOfSpeech, u32), usize>,
    index: FxHashMap<String, FxHashMap<PartOfSpeech, Vec<usize>>>,
    exceptions: ExceptionMap,
    taxonomy: Taxonomy,
    family_max_depth: FxHashMap<PartOfSpeech, usize>,
}

impl WordNet {
    /// Load a WordNet `dict/` directory.
    pub fn load(dir: &Path) -> Result<Self, LexiconError> {
        let raw = parser::read_dir(dir)?;
        let wordnet = Self::assemble(raw);
        info!(
            dir = %dir.display(),
            synsets = wordnet.synsets.len(),
            lemmas = wordnet.index.len(),
            "loaded WordNet"
        );
        Ok(wordnet)
    }

    /// Resolve offsets into sense ids and build the taxonomy.
    pub(crate) fn assemble(raw: RawLexicon) -> Self {
        let mut synsets = Vec::with_capacity(raw.synsets.len());
        let mut by_offset = FxHashMap::default();
        let mut kept = Vec::with_capacity(raw.synsets.len());

        for record in raw.synsets {
            let key = (record.pos.family(), record.offset);
            if by_offset.contains_key(&key) {
                warn!(offset = record.offset, pos = %record.pos, "duplicate synset offset, keeping first");
                continue;
            }
            by_offset.insert(key, synsets.len());
            synsets.push(Synset {
                offset: record.offset,
                pos: record.pos,
                lemmas: record.lemmas,
                name: String::new(),
            });
            kept.push(record.hypernyms);
        }

        let mut edges = Vec::new();
        let mut dangling = 0usize;
        for (child, hypernyms) in kept.iter().enumerate() {
            for key in hypernyms {
                match by_offset.get(key) {
                    Some(&parent) => edges.push((child, parent)),
                    None => dangling += 1,
                }
            }
        }
        if dangling > 0 {
            warn!(count = dangling, "hypernym pointers to unknown synsets ignored");
        }

        let mut index: FxHashMap<String, FxHashMap<PartOfSpeech, Vec<usize>>> = FxHashMap::default();
        let mut unresolved = 0usize;
        for entry in raw.index {
            let ids: Vec<usize> = entry
                .offsets
                .iter()
                .filter_map(|off| {
                    let id = by_offset.get(&(entry.family, *off)).copied();
                    if id.is_none() {
                        unresolved += 1;
                    }
                    id
                })
                .collect();
            index.entry(entry.lemma).or_default().insert(entry.family, ids);
        }
        if unresolved > 0 {
            warn!(count = unresolved, "index offsets without a data record ignored");
        }

        for (i, synset) in synsets.iter_mut().enumerate() {
            let first = synset
                .lemmas
                .first()
                .map(|l| l.to_lowercase())
                .unwrap_or_default();
            let sense_no = index
                .get(&first)
                .and_then(|by_pos| by_pos.get(&synset.pos.family()))
                .and_then(|ids| ids.iter().position(|&id| id == i))
                .map_or(0, |p| p + 1);
            synset.name = format!("{}.{}.{:02}", first, synset.pos.tag(), sense_no);
        }

        let taxonomy = Taxonomy::new(synsets.len(), edges);

        let mut family_max_depth: FxHashMap<PartOfSpeech, usize> = FxHashMap::default();
        for (i, synset) in synsets.iter().enumerate() {
            let depth = family_max_depth.entry(synset.pos.family()).or_insert(0);
            *depth = (*depth).max(taxonomy.max_depth(i));
        }

        Self {
            synsets,
            by_offset,
            index,
            exceptions: raw.exceptions,
            taxonomy,
            family_max_depth,
        }
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn synset(&self, id: SenseId) -> Option<&Synset> {
        self.synsets.get(id.index())
    }

    /// Sense id of the synset stored at `offset` in the `pos` data file.
    pub fn sense_at(&self, pos: PartOfSpeech, offset: u32) -> Option<SenseId> {
        self.by_offset
            .get(&(pos.family(), offset))
            .map(|&i| SenseId::new(i as u32))
    }

    fn is_indexed(&self, form: &str, pos: PartOfSpeech) -> bool {
        self.index
            .get(form)
            .is_some_and(|by_pos| by_pos.contains_key(&pos.family()))
    }

    fn candidate(&self, id: usize) -> SenseCandidate {
        SenseCandidate::new(SenseId::new(id as u32), self.synsets[id].pos)
    }
}

impl ILexicalResource for WordNet {
    type InformationContent = IcStore;

    fn candidates(&self, word: &str) -> SenseCandidates {
        let mut out = SenseCandidates::new();
        let lemma = word.trim().to_lowercase().replace(' ', "_");
        if lemma.is_empty() {
            return out;
        }
        for pos in PartOfSpeech::LOOKUP_ORDER {
            let forms = morphy::base_forms(&lemma, pos, &self.exceptions, |form| {
                self.is_indexed(form, pos)
            });
            for form in forms {
                if let Some(ids) = self.index.get(&form).and_then(|by_pos| by_pos.get(&pos)) {
                    out.extend(ids.iter().map(|&id| self.candidate(id)));
                }
            }
        }
        out
    }

    fn similarity(
        &self,
        kind: MetricKind,
        a: &SenseCandidate,
        b: &SenseCandidate,
        ic: Option<&IcStore>,
    ) -> Option<f64> {
        let (a, b) = (a.id.index(), b.id.index());
        if a >= self.synsets.len() || b >= self.synsets.len() {
            return None;
        }
        match kind {
            MetricKind::Path => self.path_similarity(a, b),
            MetricKind::WuPalmer => self.wu_palmer_similarity(a, b),
            MetricKind::LeacockChodorow => self.leacock_chodorow_similarity(a, b),
            MetricKind::Resnik => self.resnik_similarity(a, b, ic?),
            MetricKind::JiangConrath => self.jiang_conrath_similarity(a, b, ic?),
            MetricKind::Lin => self.lin_similarity(a, b, ic?),
        }
    }
}
