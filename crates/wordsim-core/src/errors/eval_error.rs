//! Top-level evaluation error. All subsystem errors convert into this.

use super::error_code::{self, WordsimErrorCode};
use super::{ConfigError, InputError, LexiconError};

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("no word pairs to evaluate")]
    EmptyInput,

    #[error("series length mismatch: {human} human scores vs {computed} computed scores")]
    SeriesMismatch { human: usize, computed: usize },

    #[error("cannot write report: {0}")]
    Output(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WordsimErrorCode for EvalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => error_code::EVAL_EMPTY_INPUT,
            Self::SeriesMismatch { .. } => error_code::EVAL_SERIES_MISMATCH,
            Self::Output(_) => error_code::EVAL_OUTPUT,
            Self::Input(e) => e.error_code(),
            Self::Lexicon(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type EvalResult<T> = Result<T, EvalError>;
