//! Stable error codes surfaced to users and scripts.

/// Maps an error variant to a stable, machine-readable code.
pub trait WordsimErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const INPUT_IO: &str = "INPUT_IO";
pub const INPUT_MALFORMED_RECORD: &str = "INPUT_MALFORMED_RECORD";
pub const INPUT_INVALID_SCORE: &str = "INPUT_INVALID_SCORE";
pub const INPUT_EMPTY: &str = "INPUT_EMPTY";

pub const LEXICON_IO: &str = "LEXICON_IO";
pub const LEXICON_MALFORMED: &str = "LEXICON_MALFORMED";
pub const LEXICON_MISSING_FILE: &str = "LEXICON_MISSING_FILE";

pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID_VALUE: &str = "CONFIG_INVALID_VALUE";

pub const EVAL_EMPTY_INPUT: &str = "EVAL_EMPTY_INPUT";
pub const EVAL_SERIES_MISMATCH: &str = "EVAL_SERIES_MISMATCH";
pub const EVAL_OUTPUT: &str = "EVAL_OUTPUT";
