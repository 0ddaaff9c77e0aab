//! Metric applicability gate.
//!
//! One declarative table decides, per metric, whether a sense combination
//! may be scored at all. The aggregator consults it before every call into
//! the lexical resource.

use std::fmt;

use wordsim_core::{IInformationContent, MetricKind, PartOfSpeech, SenseCandidate};

const ADJECTIVAL: &[PartOfSpeech] = &[PartOfSpeech::Adjective, PartOfSpeech::AdjectiveSatellite];

/// Preconditions for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRule {
    pub requires_same_pos: bool,
    pub requires_ic: bool,
    /// Parts of speech the metric never applies to.
    pub excluded_pos: &'static [PartOfSpeech],
}

impl MetricRule {
    const STRUCTURAL: Self = Self {
        requires_same_pos: false,
        requires_ic: false,
        excluded_pos: &[],
    };
    const SAME_POS: Self = Self {
        requires_same_pos: true,
        requires_ic: false,
        excluded_pos: &[],
    };
    const INFORMATION_CONTENT: Self = Self {
        requires_same_pos: true,
        requires_ic: true,
        excluded_pos: ADJECTIVAL,
    };
}

/// The applicability table, indexed by [`MetricKind::index`].
pub static APPLICABILITY: [(MetricKind, MetricRule); MetricKind::COUNT] = [
    (MetricKind::Path, MetricRule::STRUCTURAL),
    (MetricKind::WuPalmer, MetricRule::STRUCTURAL),
    (MetricKind::LeacockChodorow, MetricRule::SAME_POS),
    (MetricKind::Resnik, MetricRule::INFORMATION_CONTENT),
    (MetricKind::JiangConrath, MetricRule::INFORMATION_CONTENT),
    (MetricKind::Lin, MetricRule::INFORMATION_CONTENT),
];

/// Why a sense combination was skipped for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionFailure {
    PosMismatch {
        first: PartOfSpeech,
        second: PartOfSpeech,
    },
    PosExcluded(PartOfSpeech),
    /// No IC store was supplied, or it has no counts for this POS.
    IcUnavailable(PartOfSpeech),
}

impl fmt::Display for PreconditionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PosMismatch { first, second } => {
                write!(f, "part of speech mismatch ({first} vs {second})")
            }
            Self::PosExcluded(pos) => write!(f, "part of speech {pos} excluded"),
            Self::IcUnavailable(pos) => write!(f, "no information content for {pos}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicabilityGate;

impl ApplicabilityGate {
    pub fn rule(kind: MetricKind) -> &'static MetricRule {
        &APPLICABILITY[kind.index()].1
    }

    /// Check every precondition of `kind` for the combination `(a, b)`.
    pub fn check<I>(
        &self,
        kind: MetricKind,
        a: &SenseCandidate,
        b: &SenseCandidate,
        ic: Option<&I>,
    ) -> Result<(), PreconditionFailure>
    where
        I: IInformationContent + ?Sized,
    {
        let rule = Self::rule(kind);
        if rule.requires_same_pos && a.pos != b.pos {
            return Err(PreconditionFailure::PosMismatch {
                first: a.pos,
                second: b.pos,
            });
        }
        if let Some(pos) = [a.pos, b.pos]
            .into_iter()
            .find(|pos| rule.excluded_pos.contains(pos))
        {
            return Err(PreconditionFailure::PosExcluded(pos));
        }
        if rule.requires_ic && !ic.is_some_and(|store| store.covers(a.pos)) {
            return Err(PreconditionFailure::IcUnavailable(a.pos));
        }
        Ok(())
    }
}
