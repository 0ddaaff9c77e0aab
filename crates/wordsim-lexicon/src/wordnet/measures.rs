//! The six WordNet similarity measures.
//!
//! Noun hierarchies share a single top (`entity`), so only non-noun senses
//! get a simulated root joining their top-level senses. Depths count hops
//! to a top-level sense, so a top-level sense has depth 0.

use std::cmp::Ordering;

use wordsim_core::constants::UNBOUNDED_SIMILARITY;
use wordsim_core::{FxHashSet, PartOfSpeech};

use super::taxonomy::HypernymDistances;
use super::WordNet;
use crate::information_content::IcStore;

/// A lowest common hypernym: a real sense or the simulated root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subsumer {
    Root,
    Sense(usize),
}

fn needs_root(pos: PartOfSpeech) -> bool {
    pos != PartOfSpeech::Noun
}

impl WordNet {
    fn pos_of(&self, sense: usize) -> PartOfSpeech {
        self.synsets[sense].pos
    }

    fn distances(&self, sense: usize, simulate_root: bool) -> HypernymDistances {
        self.taxonomy.hypernym_distances(sense, simulate_root)
    }

    /// Senses reachable through hypernym edges, including `sense` itself.
    fn closure(&self, sense: usize) -> FxHashSet<usize> {
        self.distances(sense, false).real.into_keys().collect()
    }

    fn shortest_path_distance(&self, a: usize, b: usize, simulate_root: bool) -> Option<usize> {
        if a == b {
            return Some(0);
        }
        self.distances(a, simulate_root)
            .meet(&self.distances(b, simulate_root))
    }

    fn distance_to(&self, sense: usize, subsumer: Subsumer, simulate_root: bool) -> Option<usize> {
        match subsumer {
            Subsumer::Sense(s) => self.shortest_path_distance(sense, s, simulate_root),
            Subsumer::Root => self
                .distances(sense, simulate_root)
                .meet(&HypernymDistances::of_root()),
        }
    }

    fn subsumer_name(&self, subsumer: Subsumer) -> &str {
        match subsumer {
            Subsumer::Root => "*ROOT*",
            Subsumer::Sense(s) => &self.synsets[s].name,
        }
    }

    /// Deepest shared hypernyms by minimum depth, sorted by name.
    fn lowest_common_hypernyms(&self, a: usize, b: usize, simulate_root: bool) -> Vec<Subsumer> {
        let other = self.closure(b);
        let mut common: Vec<(Subsumer, usize)> = self
            .closure(a)
            .into_iter()
            .filter(|s| other.contains(s))
            .map(|s| (Subsumer::Sense(s), self.taxonomy.min_depth(s)))
            .collect();
        if simulate_root {
            common.push((Subsumer::Root, 0));
        }

        let Some(deepest) = common.iter().map(|(_, d)| *d).max() else {
            return Vec::new();
        };
        let mut lowest: Vec<Subsumer> = common
            .into_iter()
            .filter(|(_, d)| *d == deepest)
            .map(|(s, _)| s)
            .collect();
        lowest.sort_by(|x, y| self.subsumer_name(*x).cmp(self.subsumer_name(*y)));
        lowest
    }

    /// `1 / (distance + 1)`.
    pub(super) fn path_similarity(&self, a: usize, b: usize) -> Option<f64> {
        let simulate_root = needs_root(self.pos_of(a)) || needs_root(self.pos_of(b));
        let distance = self.shortest_path_distance(a, b, simulate_root)?;
        Some(1.0 / (distance as f64 + 1.0))
    }

    /// `2 * depth(lcs) / (len(a, lcs) + len(b, lcs) + 2 * depth(lcs))`.
    pub(super) fn wu_palmer_similarity(&self, a: usize, b: usize) -> Option<f64> {
        let simulate_root = needs_root(self.pos_of(a)) || needs_root(self.pos_of(b));
        let subsumers = self.lowest_common_hypernyms(a, b, simulate_root);
        let subsumer = if subsumers.contains(&Subsumer::Sense(a)) {
            Subsumer::Sense(a)
        } else {
            *subsumers.first()?
        };

        let subsumer_depth = match subsumer {
            Subsumer::Root => 0,
            Subsumer::Sense(s) => self.taxonomy.max_depth(s),
        };
        let depth = subsumer_depth as f64 + 1.0;
        let len1 = self.distance_to(a, subsumer, simulate_root)? as f64 + depth;
        let len2 = self.distance_to(b, subsumer, simulate_root)? as f64 + depth;
        Some(2.0 * depth / (len1 + len2))
    }

    /// `-ln((distance + 1) / (2 * D))`, `D` the deepest sense of the POS.
    /// Requires identical POS tags.
    pub(super) fn leacock_chodorow_similarity(&self, a: usize, b: usize) -> Option<f64> {
        let pos = self.pos_of(a);
        if pos != self.pos_of(b) {
            return None;
        }
        let simulate_root = needs_root(pos);
        let max_depth = self.family_max_depth.get(&pos.family()).copied().unwrap_or(0)
            + usize::from(simulate_root);
        if max_depth == 0 {
            return None;
        }
        let distance = self.shortest_path_distance(a, b, simulate_root)?;
        Some(-((distance as f64 + 1.0) / (2.0 * max_depth as f64)).ln())
    }

    /// `(IC(a), IC(b), IC(lcs))` with the most informative common hypernym.
    fn lcs_ic(&self, a: usize, b: usize, ic: &IcStore) -> Option<(f64, f64, f64)> {
        let (sa, sb) = (&self.synsets[a], &self.synsets[b]);
        if sa.pos != sb.pos {
            return None;
        }
        let ic1 = ic.information_content(sa.pos, sa.offset)?;
        let ic2 = ic.information_content(sb.pos, sb.offset)?;

        let other = self.closure(b);
        let lcs_ic = self
            .closure(a)
            .into_iter()
            .filter(|s| other.contains(s))
            .filter_map(|s| {
                let synset = &self.synsets[s];
                ic.information_content(synset.pos, synset.offset)
            })
            .max_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal))
            .unwrap_or(0.0);
        Some((ic1, ic2, lcs_ic))
    }

    /// `IC(lcs)`.
    pub(super) fn resnik_similarity(&self, a: usize, b: usize, ic: &IcStore) -> Option<f64> {
        self.lcs_ic(a, b, ic).map(|(_, _, lcs)| lcs)
    }

    /// `1 / (IC(a) + IC(b) - 2 * IC(lcs))`.
    pub(super) fn jiang_conrath_similarity(&self, a: usize, b: usize, ic: &IcStore) -> Option<f64> {
        let (ic1, ic2, lcs) = self.lcs_ic(a, b, ic)?;
        if a == b {
            return Some(UNBOUNDED_SIMILARITY);
        }
        // a top-level sense, or one never seen in the IC corpus
        if ic1 == 0.0 || ic2 == 0.0 {
            return Some(0.0);
        }
        let difference = ic1 + ic2 - 2.0 * lcs;
        if difference == 0.0 {
            return Some(UNBOUNDED_SIMILARITY);
        }
        Some(1.0 / difference)
    }

    /// `2 * IC(lcs) / (IC(a) + IC(b))`.
    pub(super) fn lin_similarity(&self, a: usize, b: usize, ic: &IcStore) -> Option<f64> {
        let (ic1, ic2, lcs) = self.lcs_ic(a, b, ic)?;
        let denominator = ic1 + ic2;
        if denominator == 0.0 {
            return None;
        }
        Some(2.0 * lcs / denominator)
    }
}
