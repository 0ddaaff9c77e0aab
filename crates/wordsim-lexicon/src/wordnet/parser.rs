//! Parsers for the WordNet database files (`index.*`, `data.*`, `*.exc`).
//!
//! Lines that start with a space are the license header and are skipped.

use std::path::Path;

use tracing::debug;
use wordsim_core::errors::LexiconError;
use wordsim_core::{FxHashMap, PartOfSpeech};

use super::morphy::ExceptionMap;

/// File name stem per POS family.
pub const FILE_STEMS: [(PartOfSpeech, &str); 4] = [
    (PartOfSpeech::Noun, "noun"),
    (PartOfSpeech::Verb, "verb"),
    (PartOfSpeech::Adjective, "adj"),
    (PartOfSpeech::Adverb, "adv"),
];

const HYPERNYM: &str = "@";
const INSTANCE_HYPERNYM: &str = "@i";

/// One `data.*` record, before offsets are resolved to sense ids.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSynset {
    pub offset: u32,
    pub pos: PartOfSpeech,
    pub lemmas: Vec<String>,
    /// `(target family, target offset)` for `@` and `@i` pointers.
    pub hypernyms: Vec<(PartOfSpeech, u32)>,
}

/// One `index.*` record.
#[derive(Debug, Clone, PartialEq)]
pub struct RawIndexEntry {
    pub lemma: String,
    pub family: PartOfSpeech,
    pub offsets: Vec<u32>,
}

/// Everything read from a dictionary, in file order.
#[derive(Debug, Clone, Default)]
pub struct RawLexicon {
    pub synsets: Vec<RawSynset>,
    pub index: Vec<RawIndexEntry>,
    pub exceptions: ExceptionMap,
}

fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> LexiconError {
    LexiconError::Malformed {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

fn is_header(line: &str) -> bool {
    line.starts_with(' ') || line.trim().is_empty()
}

/// Strip an adjective position marker such as `(a)`, `(p)`, `(ip)`.
fn strip_marker(word: &str) -> &str {
    match (word.ends_with(')'), word.find('(')) {
        (true, Some(open)) if open > 0 => &word[..open],
        _ => word,
    }
}

/// Parse a `data.*` file.
pub fn parse_data(text: &str, path: &Path) -> Result<Vec<RawSynset>, LexiconError> {
    let mut synsets = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if is_header(line) {
            continue;
        }
        let line_no = idx + 1;
        let head = line.split_once('|').map_or(line, |(h, _gloss)| h);
        let fields: Vec<&str> = head.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(malformed(path, line_no, "truncated synset record"));
        }

        let offset: u32 = fields[0]
            .parse()
            .map_err(|_| malformed(path, line_no, format!("invalid offset {:?}", fields[0])))?;
        let pos = fields[2]
            .chars()
            .next()
            .and_then(PartOfSpeech::from_tag)
            .ok_or_else(|| malformed(path, line_no, format!("invalid synset type {:?}", fields[2])))?;
        let w_cnt = usize::from_str_radix(fields[3], 16)
            .map_err(|_| malformed(path, line_no, format!("invalid word count {:?}", fields[3])))?;

        let words_end = 4 + 2 * w_cnt;
        if fields.len() <= words_end {
            return Err(malformed(path, line_no, "word list overruns record"));
        }
        let lemmas = fields[4..words_end]
            .iter()
            .step_by(2)
            .map(|w| strip_marker(w).to_string())
            .collect();

        let p_cnt: usize = fields[words_end]
            .parse()
            .map_err(|_| malformed(path, line_no, format!("invalid pointer count {:?}", fields[words_end])))?;
        let ptr_start = words_end + 1;
        if fields.len() < ptr_start + 4 * p_cnt {
            return Err(malformed(path, line_no, "pointer list overruns record"));
        }

        let mut hypernyms = Vec::new();
        for ptr in fields[ptr_start..ptr_start + 4 * p_cnt].chunks_exact(4) {
            if ptr[0] != HYPERNYM && ptr[0] != INSTANCE_HYPERNYM {
                continue;
            }
            let target: u32 = ptr[1]
                .parse()
                .map_err(|_| malformed(path, line_no, format!("invalid pointer offset {:?}", ptr[1])))?;
            let target_pos = ptr[2]
                .chars()
                .next()
                .and_then(PartOfSpeech::from_tag)
                .ok_or_else(|| malformed(path, line_no, format!("invalid pointer pos {:?}", ptr[2])))?;
            hypernyms.push((target_pos.family(), target));
        }

        synsets.push(RawSynset {
            offset,
            pos,
            lemmas,
            hypernyms,
        });
    }
    Ok(synsets)
}

/// Parse an `index.*` file.
pub fn parse_index(text: &str, path: &Path) -> Result<Vec<RawIndexEntry>, LexiconError> {
    let mut entries = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if is_header(line) {
            continue;
        }
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(malformed(path, line_no, "truncated index record"));
        }
        let family = fields[1]
            .chars()
            .next()
            .and_then(PartOfSpeech::from_tag)
            .map(PartOfSpeech::family)
            .ok_or_else(|| malformed(path, line_no, format!("invalid pos {:?}", fields[1])))?;
        let synset_cnt: usize = fields[2]
            .parse()
            .map_err(|_| malformed(path, line_no, format!("invalid synset count {:?}", fields[2])))?;
        let p_cnt: usize = fields[3]
            .parse()
            .map_err(|_| malformed(path, line_no, format!("invalid pointer count {:?}", fields[3])))?;

        // pointer symbols, then sense_cnt and tagsense_cnt
        let offsets_start = 4 + p_cnt + 2;
        if fields.len() < offsets_start + synset_cnt {
            return Err(malformed(path, line_no, "offset list overruns record"));
        }
        let offsets = fields[offsets_start..offsets_start + synset_cnt]
            .iter()
            .map(|f| {
                f.parse::<u32>()
                    .map_err(|_| malformed(path, line_no, format!("invalid offset {f:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        entries.push(RawIndexEntry {
            lemma: fields[0].to_lowercase(),
            family,
            offsets,
        });
    }
    Ok(entries)
}

/// Parse a `*.exc` file: `inflected base [base ...]` per line.
pub fn parse_exceptions(text: &str) -> FxHashMap<String, Vec<String>> {
    let mut map = FxHashMap::default();
    for line in text.lines() {
        let mut fields = line.split_whitespace();
        let Some(inflected) = fields.next() else {
            continue;
        };
        let bases: Vec<String> = fields.map(str::to_string).collect();
        if !bases.is_empty() {
            map.insert(inflected.to_string(), bases);
        }
    }
    map
}

fn read(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a WordNet `dict/` directory.
///
/// Each POS is optional, but an `index.*` without its `data.*` is an error,
/// and at least one POS must be present.
pub fn read_dir(dir: &Path) -> Result<RawLexicon, LexiconError> {
    let mut raw = RawLexicon::default();
    let mut found_any = false;

    for (family, stem) in FILE_STEMS {
        let index_path = dir.join(format!("index.{stem}"));
        let data_path = dir.join(format!("data.{stem}"));
        if !index_path.exists() {
            debug!(path = %index_path.display(), "index file absent, skipping part of speech");
            continue;
        }
        if !data_path.exists() {
            return Err(LexiconError::MissingFile { path: data_path });
        }
        found_any = true;

        raw.index.extend(parse_index(&read(&index_path)?, &index_path)?);
        raw.synsets.extend(parse_data(&read(&data_path)?, &data_path)?);

        let exc_path = dir.join(format!("{stem}.exc"));
        if exc_path.exists() {
            raw.exceptions
                .insert(family, parse_exceptions(&read(&exc_path)?));
        }
    }

    if !found_any {
        return Err(LexiconError::MissingFile {
            path: dir.join("index.noun"),
        });
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA_NOUN: &str = "  1 This software and database is being provided\n\
00001740 03 n 01 entity 0 003 ~ 00001930 n 0000 ~ 00002137 n 0000 ~ 04431553 n 0000 | that which is perceived\n\
02084071 05 n 02 dog 0 domestic_dog 0 002 @ 02083346 n 0000 @i 01317541 n 0000 | a member of the genus Canis\n";

    const DATA_ADJ: &str = "00001740 00 a 01 able 0 000 | having the necessary means\n\
00004296 00 s 02 galore(ip) 0 in_abundance(ip) 0 001 & 00013887 a 0000 | in great numbers\n";

    const INDEX_NOUN: &str = "  1 This software and database\n\
dog n 7 5 @ ~ #m #p %p 7 1 02084071 10114209 10023039 09886220 07676602 07570720 03907626\n\
entity n 1 1 ~ 1 0 00001740\n";

    #[test]
    fn parses_data_records_and_hypernyms() {
        let synsets = parse_data(DATA_NOUN, Path::new("data.noun")).unwrap();
        assert_eq!(synsets.len(), 2);
        assert_eq!(synsets[0].offset, 1740);
        assert!(synsets[0].hypernyms.is_empty());
        assert_eq!(synsets[1].lemmas, vec!["dog", "domestic_dog"]);
        assert_eq!(
            synsets[1].hypernyms,
            vec![(PartOfSpeech::Noun, 2083346), (PartOfSpeech::Noun, 1317541)]
        );
    }

    #[test]
    fn strips_adjective_markers_and_reads_satellites() {
        let synsets = parse_data(DATA_ADJ, Path::new("data.adj")).unwrap();
        assert_eq!(synsets[1].pos, PartOfSpeech::AdjectiveSatellite);
        assert_eq!(synsets[1].lemmas, vec!["galore", "in_abundance"]);
        assert!(synsets[1].hypernyms.is_empty());
    }

    #[test]
    fn parses_index_records() {
        let entries = parse_index(INDEX_NOUN, Path::new("index.noun")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].lemma, "dog");
        assert_eq!(entries[0].offsets.len(), 7);
        assert_eq!(entries[0].offsets[0], 2084071);
        assert_eq!(entries[1].offsets, vec![1740]);
    }

    #[test]
    fn truncated_record_reports_line() {
        let err = parse_index("dog n 3 0 3 0 02084071\n", Path::new("index.noun")).unwrap_err();
        match err {
            LexiconError::Malformed { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parses_exception_lists() {
        let map = parse_exceptions("mice mouse\nfeet foot\n\n");
        assert_eq!(map.get("mice"), Some(&vec!["mouse".to_string()]));
        assert_eq!(map.len(), 2);
    }
}
