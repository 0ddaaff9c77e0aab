//! Part-of-speech tags as used by WordNet-style lexical resources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech category attached to a sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    /// Lookup order for surface words: noun, verb, adjective, adverb.
    /// Satellites are reached through the adjective index.
    pub const LOOKUP_ORDER: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Single-letter tag (`n`, `v`, `a`, `s`, `r`).
    pub fn tag(self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adjective => 'a',
            Self::AdjectiveSatellite => 's',
            Self::Adverb => 'r',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'n' => Some(Self::Noun),
            'v' => Some(Self::Verb),
            'a' => Some(Self::Adjective),
            's' => Some(Self::AdjectiveSatellite),
            'r' => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Satellites share the adjective family's files and statistics.
    pub fn family(self) -> Self {
        match self {
            Self::AdjectiveSatellite => Self::Adjective,
            other => other,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for pos in [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
            PartOfSpeech::AdjectiveSatellite,
            PartOfSpeech::Adverb,
        ] {
            assert_eq!(PartOfSpeech::from_tag(pos.tag()), Some(pos));
        }
        assert_eq!(PartOfSpeech::from_tag('x'), None);
    }

    #[test]
    fn satellite_belongs_to_adjective_family() {
        assert_eq!(PartOfSpeech::AdjectiveSatellite.family(), PartOfSpeech::Adjective);
        assert_eq!(PartOfSpeech::Verb.family(), PartOfSpeech::Verb);
    }
}
