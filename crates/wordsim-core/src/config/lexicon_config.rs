//! Lexical resource locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// WordNet `dict/` directory holding `index.*`, `data.*` and `*.exc`.
    pub wordnet_dir: Option<PathBuf>,
    /// Information-content counts file, e.g. `ic-brown.dat`.
    pub ic_file: Option<PathBuf>,
}
