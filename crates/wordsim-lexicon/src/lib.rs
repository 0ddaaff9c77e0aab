//! # wordsim-lexicon
//!
//! Read-only lexical resources for the wordsim engine.
//!
//! - `wordnet` - WordNet 3.x database loader, base-form reduction, hypernym
//!   taxonomy, and the six similarity measures.
//! - `information_content` - `ic-*.dat` counts used by the Resnik,
//!   Jiang-Conrath, and Lin measures.

pub mod information_content;
pub mod wordnet;

pub use information_content::IcStore;
pub use wordnet::{Synset, WordNet, WordNetBuilder};
