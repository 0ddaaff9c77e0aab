//! Errors raised while reading tab-separated judgment and score files.

use std::path::PathBuf;

use super::error_code::{self, WordsimErrorCode};

/// Fatal input errors. Any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected {expected} tab-separated fields, found {found}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: invalid score {value:?}", .path.display())]
    InvalidScore {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("{}: no records", .path.display())]
    EmptyInput { path: PathBuf },
}

impl WordsimErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::INPUT_IO,
            Self::MalformedRecord { .. } => error_code::INPUT_MALFORMED_RECORD,
            Self::InvalidScore { .. } => error_code::INPUT_INVALID_SCORE,
            Self::EmptyInput { .. } => error_code::INPUT_EMPTY,
        }
    }
}
