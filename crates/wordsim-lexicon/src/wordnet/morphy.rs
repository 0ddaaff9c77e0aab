//! Base-form reduction for surface words.
//!
//! The exception list wins when it has an entry; otherwise suffix detachment
//! rules are applied, repeatedly, until some form is present in the index.

use wordsim_core::{FxHashMap, FxHashSet, PartOfSpeech};

/// `inflected form -> base forms`, per POS family.
pub type ExceptionMap = FxHashMap<PartOfSpeech, FxHashMap<String, Vec<String>>>;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules_for(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos.family() {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJ_RULES,
        _ => &[],
    }
}

fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut out = Vec::new();
    for form in forms {
        for (old, new) in rules {
            if let Some(stem) = form.strip_suffix(old) {
                out.push(format!("{stem}{new}"));
            }
        }
    }
    out
}

/// Keep forms present in the index for `pos`, first occurrence only.
fn filter_forms<F>(forms: impl IntoIterator<Item = String>, is_indexed: &F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut seen = FxHashSet::default();
    let mut result = Vec::new();
    for form in forms {
        if is_indexed(&form) && seen.insert(form.clone()) {
            result.push(form);
        }
    }
    result
}

/// Indexed base forms of `form` for `pos`. Empty when nothing matches.
pub fn base_forms<F>(form: &str, pos: PartOfSpeech, exceptions: &ExceptionMap, is_indexed: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    if let Some(bases) = exceptions
        .get(&pos.family())
        .and_then(|table| table.get(form))
    {
        let candidates = std::iter::once(form.to_string()).chain(bases.iter().cloned());
        return filter_forms(candidates, &is_indexed);
    }

    let rules = rules_for(pos);
    let mut forms = apply_rules(&[form.to_string()], rules);
    let first_pass = std::iter::once(form.to_string()).chain(forms.iter().cloned());
    let results = filter_forms(first_pass, &is_indexed);
    if !results.is_empty() {
        return results;
    }

    while !forms.is_empty() {
        forms = apply_rules(&forms, rules);
        let results = filter_forms(forms.iter().cloned(), &is_indexed);
        if !results.is_empty() {
            return results;
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |w| words.iter().any(|x| *x == w)
    }

    #[test]
    fn plain_form_is_returned_as_is() {
        let exc = ExceptionMap::default();
        assert_eq!(base_forms("dog", PartOfSpeech::Noun, &exc, index(&["dog"])), vec!["dog"]);
    }

    #[test]
    fn noun_plural_is_reduced() {
        let exc = ExceptionMap::default();
        assert_eq!(base_forms("dogs", PartOfSpeech::Noun, &exc, index(&["dog"])), vec!["dog"]);
        assert_eq!(base_forms("churches", PartOfSpeech::Noun, &exc, index(&["church"])), vec!["church"]);
        assert_eq!(base_forms("berries", PartOfSpeech::Noun, &exc, index(&["berry"])), vec!["berry"]);
    }

    #[test]
    fn verb_rules_can_yield_several_forms() {
        let exc = ExceptionMap::default();
        let forms = base_forms("saves", PartOfSpeech::Verb, &exc, index(&["save", "sav"]));
        assert_eq!(forms, vec!["save", "sav"]);
    }

    #[test]
    fn exception_list_takes_precedence() {
        let mut exc = ExceptionMap::default();
        exc.entry(PartOfSpeech::Noun)
            .or_default()
            .insert("mice".to_string(), vec!["mouse".to_string()]);
        assert_eq!(base_forms("mice", PartOfSpeech::Noun, &exc, index(&["mouse", "mic"])), vec!["mouse"]);
    }

    #[test]
    fn satellites_use_adjective_rules() {
        let exc = ExceptionMap::default();
        assert_eq!(
            base_forms("greater", PartOfSpeech::AdjectiveSatellite, &exc, index(&["great"])),
            vec!["great"]
        );
    }

    #[test]
    fn unknown_word_yields_nothing() {
        let exc = ExceptionMap::default();
        assert!(base_forms("qzxv", PartOfSpeech::Noun, &exc, index(&["dog"])).is_empty());
        assert!(base_forms("quickly", PartOfSpeech::Adverb, &exc, index(&["quick"])).is_empty());
    }
}
