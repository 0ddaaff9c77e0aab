//! Shared traits used across wordsim crates.

pub mod lexical_resource;

pub use lexical_resource::{IInformationContent, ILexicalResource};
