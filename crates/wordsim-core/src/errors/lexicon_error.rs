//! Errors raised while loading the lexical database or IC counts.

use std::path::PathBuf;

use super::error_code::{self, WordsimErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required lexicon file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("{}:{line}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl WordsimErrorCode for LexiconError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::LEXICON_IO,
            Self::MissingFile { .. } => error_code::LEXICON_MISSING_FILE,
            Self::Malformed { .. } => error_code::LEXICON_MALFORMED,
        }
    }
}
