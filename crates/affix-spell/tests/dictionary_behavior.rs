//! End-to-end tests against the sample dictionary in `test-data/`.
//!
//! Run: cargo test -p affix-spell --test dictionary_behavior

use std::path::PathBuf;
use std::sync::Arc;

use affix_dict::{Dictionary, DictionarySnapshot};
use affix_spell::{SpellError, Spellchecker, SuggestOptions};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-data")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

fn sample() -> Spellchecker {
    let mut checker = Spellchecker::new();
    checker
        .parse(&fixture("sample.aff"), &fixture("sample.dic"))
        .expect("sample dictionary parses");
    checker
}

// ---------------------------------------------------------------------------
// Acceptance
// ---------------------------------------------------------------------------

#[test]
fn plain_words_and_case_variants() {
    let checker = sample();
    for word in ["cat", "Cat", "CAT", "world", "World", "  spelling  "] {
        assert!(checker.check(word).unwrap(), "{word:?} should be accepted");
    }
    for word in ["catt", "wrold", "", "cats"] {
        assert!(!checker.check(word).unwrap(), "{word:?} should be rejected");
    }
}

#[test]
fn keepcase_capitalized_form_blocks_uppercase() {
    let checker = sample();
    assert!(checker.check("hello").unwrap());
    assert!(checker.check("Hello").unwrap());
    assert!(!checker.check("HELLO").unwrap());
}

#[test]
fn keepcase_word_only_in_its_own_case() {
    let checker = sample();
    assert!(checker.check("iPod").unwrap());
    assert!(!checker.check("ipod").unwrap());
    assert!(!checker.check("IPOD").unwrap());
}

#[test]
fn proper_noun_needs_capital() {
    let checker = sample();
    assert!(checker.check("Paris").unwrap());
    assert!(checker.check("PARIS").unwrap());
    assert!(!checker.check("paris").unwrap());
}

#[test]
fn ordinal_compounds() {
    let checker = sample();
    for word in ["11th", "12th", "21st", "22nd", "103rd"] {
        assert!(checker.check(word).unwrap(), "{word:?} should be accepted");
    }
    for word in ["21th", "1nd", "th"] {
        assert!(!checker.check(word).unwrap(), "{word:?} should be rejected");
    }
}

#[test]
fn compound_only_stem_rejected_standalone() {
    let checker = sample();
    assert!(!checker.check_exact("1th").unwrap());
    assert!(!checker.check("1th").unwrap());
    assert!(checker.check("1st").unwrap());
}

#[test]
fn compound_match_ignores_case() {
    let checker = sample();
    assert!(checker.check_exact("21ST").unwrap());
}

#[test]
fn has_flag_by_name() {
    let checker = sample();
    assert!(checker.has_flag("damn", "NOSUGGEST").unwrap());
    assert!(!checker.has_flag("dame", "NOSUGGEST").unwrap());
    assert!(checker.has_flag("1th", "ONLYINCOMPOUND").unwrap());
    assert!(!checker.has_flag("cat", "FORBIDDENWORD").unwrap());
    assert!(!checker.has_flag("missing", "KEEPCASE").unwrap());
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn replacement_table_answers_first() {
    let checker = sample();
    assert_eq!(checker.suggest("fone").unwrap(), vec!["phone"]);
    assert_eq!(checker.suggest("thier").unwrap(), vec!["their"]);
}

#[test]
fn edit_candidates_for_misspellings() {
    let checker = sample();
    assert!(checker.suggest("cta").unwrap().contains(&"cat".to_string()));
    assert!(checker.suggest("speling").unwrap().contains(&"spelling".to_string()));
    assert!(checker.suggest("wrold").unwrap().contains(&"world".to_string()));
}

#[test]
fn accepted_word_gets_no_suggestions() {
    let checker = sample();
    assert!(checker.suggest("card").unwrap().is_empty());
    assert!(checker.suggest("21st").unwrap().is_empty());
}

#[test]
fn nosuggest_words_never_offered() {
    let checker = sample();
    assert!(checker.check("damn").unwrap());
    // "damn" outranks "dame" but is dropped after truncation
    assert_eq!(checker.suggest("dman").unwrap(), vec!["dame"]);
    assert!(checker.suggest_with_limit("dman", 1).unwrap().is_empty());
}

#[test]
fn nosuggest_is_checked_on_the_candidate_spelling() {
    // With an uppercase letter in TRY, "damN" is generated and accepted
    // through its lowercase form. NOSUGGEST is looked up on "damN" itself,
    // which has no homographs, so the variant is offered.
    let mut checker = Spellchecker::with_options(SuggestOptions {
        max_edit_distance: 1,
        ..SuggestOptions::default()
    });
    checker.parse("TRY nN\nNOSUGGEST !\n", "1\ndamn/!\n").unwrap();

    assert!(checker.check("damN").unwrap());
    assert!(!checker.has_flag("damN", "NOSUGGEST").unwrap());
    assert_eq!(checker.suggest("dam").unwrap(), vec!["damN"]);
}

#[test]
fn suggestions_are_accepted_words() {
    let checker = sample();
    for word in ["cta", "speling", "wrold", "crad", "helo"] {
        for suggestion in checker.suggest(word).unwrap() {
            assert!(
                checker.check(&suggestion).unwrap(),
                "suggestion {suggestion:?} for {word:?} is not accepted"
            );
        }
    }
}

#[test]
fn smaller_limit_is_a_prefix() {
    let checker = sample();
    let full = checker.suggest_with_limit("crad", 5).unwrap();
    let short = checker.suggest_with_limit("crad", 2).unwrap();
    assert!(short.len() <= 2);
    assert_eq!(short.as_slice(), &full[..short.len()]);
}

#[test]
fn cache_does_not_change_results() {
    let cached = sample();
    let mut uncached = Spellchecker::with_options(SuggestOptions {
        cache_capacity: 0,
        ..SuggestOptions::default()
    });
    uncached
        .parse(&fixture("sample.aff"), &fixture("sample.dic"))
        .unwrap();

    for word in ["cta", "crad", "cta", "fone", "crad"] {
        for limit in [1, 3, 5] {
            assert_eq!(
                cached.suggest_with_limit(word, limit).unwrap(),
                uncached.suggest_with_limit(word, limit).unwrap(),
                "{word:?} limit {limit}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Dictionary lifecycle
// ---------------------------------------------------------------------------

#[test]
fn no_dictionary_is_an_error() {
    let checker = Spellchecker::new();
    let err = checker.check("cat").unwrap_err();
    assert!(matches!(err, SpellError::NoDictionary));
    assert_eq!(err.to_string(), "no dictionary loaded");
    assert!(matches!(checker.suggest("cat"), Err(SpellError::NoDictionary)));
}

#[test]
fn malformed_dictionary_reports_line() {
    let mut checker = Spellchecker::new();
    let err = checker.parse("REP x\n", "").unwrap_err();
    assert!(matches!(err, SpellError::Dictionary(_)));
    assert!(err.to_string().contains("line 1"));
    assert!(!checker.is_loaded());
}

#[test]
fn snapshot_survives_json() {
    let source = sample();
    let snapshot = source.dictionary().unwrap().snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: DictionarySnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);

    let mut checker = Spellchecker::new();
    checker.use_snapshot(restored).unwrap();
    for word in ["cat", "HELLO", "IPOD", "21st", "1th", "paris", "damn"] {
        assert_eq!(checker.check(word).unwrap(), source.check(word).unwrap(), "{word:?}");
    }
    for word in ["fone", "cta", "dman"] {
        assert_eq!(checker.suggest(word).unwrap(), source.suggest(word).unwrap(), "{word:?}");
    }
}

#[test]
fn switching_dictionaries() {
    let mut checker = sample();
    assert!(checker.check("cat").unwrap());
    let other = Dictionary::parse("TRY abc\n", "2\nabc\ncab\n").unwrap();
    checker.use_dictionary(Arc::new(other));
    assert!(!checker.check("cat").unwrap());
    assert!(checker.check("cab").unwrap());
    let suggestions = checker.suggest("cta").unwrap();
    assert!(suggestions.contains(&"cab".to_string()));
    assert!(!suggestions.contains(&"cat".to_string()));
}
