//! Error types for every wordsim subsystem.

pub mod error_code;
mod config_error;
mod eval_error;
mod input_error;
mod lexicon_error;

pub use config_error::ConfigError;
pub use eval_error::{EvalError, EvalResult};
pub use input_error::InputError;
pub use lexicon_error::LexiconError;
