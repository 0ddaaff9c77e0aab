//! Loading a WordNet `dict/` directory from disk and scoring through it.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wordsim_core::errors::LexiconError;
use wordsim_core::{IInformationContent, ILexicalResource, MetricKind, PartOfSpeech};
use wordsim_lexicon::{IcStore, WordNet};

const DATA_NOUN: &str = "  1 test lexicon\n\
00001000 03 n 01 entity 0 000 | that which is perceived\n\
00002000 03 n 01 animal 0 001 @ 00001000 n 0000 | a living organism\n\
00003000 05 n 01 dog 0 001 @ 00002000 n 0000 | a domesticated canid\n\
00004000 05 n 01 cat 0 001 @ 00002000 n 0000 | a feline mammal\n";

const INDEX_NOUN: &str = "  1 test lexicon\n\
animal n 1 1 @ 1 0 00002000\n\
cat n 1 1 @ 1 0 00004000\n\
dog n 1 1 @ 1 0 00003000\n\
entity n 1 0 1 0 00001000\n";

const DATA_VERB: &str = "00005000 29 v 01 run 0 000 01 + 02 00 | move fast\n\
00006000 29 v 01 sprint 0 001 @ 00005000 v 0000 01 + 02 00 | run very fast\n";

const INDEX_VERB: &str = "run v 1 0 1 0 00005000\n\
sprint v 1 1 @ 1 0 00006000\n";

const DATA_ADJ: &str = "00007000 00 a 01 big 0 000 | above average in size\n";
const INDEX_ADJ: &str = "big a 1 0 1 0 00007000\n";
const NOUN_EXC: &str = "doggies dog\n";

const IC: &str = "wnver::test\n\
1000n 100 ROOT\n\
2000n 50\n\
3000n 10\n\
4000n 5\n\
5000v 40 ROOT\n\
6000v 10\n";

fn write_dict(dir: &Path) {
    fs::write(dir.join("data.noun"), DATA_NOUN).unwrap();
    fs::write(dir.join("index.noun"), INDEX_NOUN).unwrap();
    fs::write(dir.join("noun.exc"), NOUN_EXC).unwrap();
    fs::write(dir.join("data.verb"), DATA_VERB).unwrap();
    fs::write(dir.join("index.verb"), INDEX_VERB).unwrap();
    fs::write(dir.join("data.adj"), DATA_ADJ).unwrap();
    fs::write(dir.join("index.adj"), INDEX_ADJ).unwrap();
    fs::write(dir.join("ic-test.dat"), IC).unwrap();
}

fn load() -> (TempDir, WordNet, IcStore) {
    let dir = TempDir::new().unwrap();
    write_dict(dir.path());
    let wordnet = WordNet::load(dir.path()).unwrap();
    let ic = IcStore::load(&dir.path().join("ic-test.dat")).unwrap();
    (dir, wordnet, ic)
}

#[test]
fn loads_every_synset() {
    let (_dir, wordnet, _ic) = load();
    assert_eq!(wordnet.synset_count(), 7);
    let dog = wordnet.sense_at(PartOfSpeech::Noun, 3000).unwrap();
    assert_eq!(wordnet.synset(dog).unwrap().name, "dog.n.01");
}

#[test]
fn all_six_measures_defined_for_sibling_nouns() {
    let (_dir, wordnet, ic) = load();
    let dog = wordnet.candidates("dog")[0];
    let cat = wordnet.candidates("cat")[0];

    for kind in MetricKind::ALL {
        let value = wordnet.similarity(kind, &dog, &cat, Some(&ic));
        let value = value.unwrap_or_else(|| panic!("{kind} undefined for dog/cat"));
        assert!(value >= 0.0, "{kind} = {value}");
    }
    let path = wordnet.similarity(MetricKind::Path, &dog, &cat, Some(&ic)).unwrap();
    assert!((path - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn inflected_forms_reach_their_lemma() {
    let (_dir, wordnet, _ic) = load();
    assert_eq!(wordnet.candidates("dogs").len(), 1);
    assert_eq!(wordnet.candidates("doggies").len(), 1);
    assert_eq!(wordnet.candidates("sprinting").len(), 1);
}

#[test]
fn unknown_word_has_no_candidates() {
    let (_dir, wordnet, _ic) = load();
    assert!(wordnet.candidates("zyzzyva").is_empty());
    assert!(wordnet.candidates("   ").is_empty());
}

#[test]
fn verbs_use_their_own_information_content() {
    let (_dir, wordnet, ic) = load();
    let run = wordnet.candidates("run")[0];
    let sprint = wordnet.candidates("sprint")[0];
    // run is the verb root: IC 0
    let res = wordnet.similarity(MetricKind::Resnik, &run, &sprint, Some(&ic));
    assert_eq!(res, Some(0.0));
    assert_eq!(wordnet.similarity(MetricKind::JiangConrath, &run, &sprint, Some(&ic)), Some(0.0));
}

#[test]
fn adjectives_have_no_information_content() {
    let (_dir, wordnet, ic) = load();
    let big = wordnet.candidates("big")[0];
    assert!(!ic.covers(PartOfSpeech::Adjective));
    assert_eq!(wordnet.similarity(MetricKind::Lin, &big, &big, Some(&ic)), None);
    assert_eq!(wordnet.similarity(MetricKind::Path, &big, &big, Some(&ic)), Some(1.0));
}

#[test]
fn mismatched_pos_leaves_same_pos_measures_undefined() {
    let (_dir, wordnet, ic) = load();
    let dog = wordnet.candidates("dog")[0];
    let run = wordnet.candidates("run")[0];
    assert!(wordnet.similarity(MetricKind::Path, &dog, &run, Some(&ic)).is_some());
    assert_eq!(wordnet.similarity(MetricKind::LeacockChodorow, &dog, &run, Some(&ic)), None);
    assert_eq!(wordnet.similarity(MetricKind::Resnik, &dog, &run, Some(&ic)), None);
}

#[test]
fn empty_directory_is_missing_file() {
    let dir = TempDir::new().unwrap();
    match WordNet::load(dir.path()) {
        Err(LexiconError::MissingFile { path }) => assert!(path.ends_with("index.noun")),
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn index_without_data_is_missing_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.noun"), INDEX_NOUN).unwrap();
    match WordNet::load(dir.path()) {
        Err(LexiconError::MissingFile { path }) => assert!(path.ends_with("data.noun")),
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected an error"),
    }
}
