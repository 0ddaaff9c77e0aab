//! # wordsim-core
//!
//! Foundation crate for the wordsim evaluation engine.
//! Defines the shared types, resource traits, errors, config, tracing setup,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::WordsimConfig;
pub use errors::error_code::WordsimErrorCode;
pub use traits::{IInformationContent, ILexicalResource};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::judgment::{HumanJudgment, WordPair};
pub use types::metric::{MetricKind, MetricScores};
pub use types::pos::PartOfSpeech;
pub use types::sense::{SenseCandidate, SenseCandidates, SenseId};
