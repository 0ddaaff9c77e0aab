//! Tab-separated record writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wordsim_core::errors::InputError;
use wordsim_core::types::precision::round_to;
use wordsim_core::WordPair;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> InputError {
    let path = path.to_path_buf();
    move |source| InputError::Io { path, source }
}

/// Write `word1\tword2` lines.
pub fn write_pairs_to<W: Write>(out: &mut W, pairs: &[WordPair]) -> std::io::Result<()> {
    for pair in pairs {
        writeln!(out, "{}\t{}", pair.first, pair.second)?;
    }
    Ok(())
}

/// Write `word1\tword2\tscore` lines; pairs without a score are omitted.
pub fn write_scored_to<W: Write>(
    out: &mut W,
    records: &[(WordPair, Option<f64>)],
    precision: u32,
) -> std::io::Result<()> {
    for (pair, score) in records {
        if let Some(score) = score {
            writeln!(out, "{}\t{}\t{}", pair.first, pair.second, round_to(*score, precision))?;
        }
    }
    Ok(())
}

pub fn write_pairs(path: &Path, pairs: &[WordPair]) -> Result<(), InputError> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut out = BufWriter::new(file);
    write_pairs_to(&mut out, pairs).map_err(io_error(path))?;
    out.flush().map_err(io_error(path))
}

pub fn write_scored(
    path: &Path,
    records: &[(WordPair, Option<f64>)],
    precision: u32,
) -> Result<(), InputError> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut out = BufWriter::new(file);
    write_scored_to(&mut out, records, precision).map_err(io_error(path))?;
    out.flush().map_err(io_error(path))
}
