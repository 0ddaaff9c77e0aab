//! `ILexicalResource` / `IInformationContent`: the read-only capabilities
//! the evaluation engine consumes.
//!
//! Both are loaded once at startup and passed by reference; neither has a
//! writer, so no synchronisation is involved.

use crate::types::metric::MetricKind;
use crate::types::pos::PartOfSpeech;
use crate::types::sense::{SenseCandidate, SenseCandidates};

/// Frequency-derived information content, keyed by the resource's senses.
pub trait IInformationContent {
    /// Whether the store has any entries for this part of speech.
    /// Satellites are expected to be answered through their family.
    fn covers(&self, pos: PartOfSpeech) -> bool;
}

/// A lexical database that maps surface words to senses and scores sense
/// pairs.
pub trait ILexicalResource {
    /// IC store understood by this resource's IC-backed measures.
    type InformationContent: IInformationContent + ?Sized;

    /// Candidate senses for `word`, in resource order. Empty when the word
    /// is unknown.
    fn candidates(&self, word: &str) -> SenseCandidates;

    /// Similarity of `a` and `b` under `kind`, or `None` when undefined.
    ///
    /// IC-backed kinds return `None` when `ic` is absent.
    fn similarity(
        &self,
        kind: MetricKind,
        a: &SenseCandidate,
        b: &SenseCandidate,
        ic: Option<&Self::InformationContent>,
    ) -> Option<f64>;
}
