//! Tab-separated judgment, pair, and score files.

pub mod reader;
pub mod writer;

pub use reader::{parse_judgments, parse_pairs, parse_scored, read_judgments, read_pairs, read_scored};
pub use writer::{write_pairs, write_pairs_to, write_scored, write_scored_to};
