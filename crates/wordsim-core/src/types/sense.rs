//! Sense candidates returned by a lexical resource.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pos::PartOfSpeech;

/// Opaque handle into a lexical resource. Only meaningful to the resource
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SenseId(u32);

impl SenseId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One candidate sense for a surface word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenseCandidate {
    pub id: SenseId,
    pub pos: PartOfSpeech,
}

impl SenseCandidate {
    pub fn new(id: SenseId, pos: PartOfSpeech) -> Self {
        Self { id, pos }
    }
}

/// Candidates for one word, in resource order. Most words have only a
/// handful of senses.
pub type SenseCandidates = SmallVec<[SenseCandidate; 8]>;
