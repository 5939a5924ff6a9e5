//! Property-based tests for acceptance and suggestion.
//!
//! Generates random lowercase words and checks the relationships between
//! `check`, `suggest`, and the NOSUGGEST flag that must hold for any input.

use std::path::PathBuf;

use proptest::prelude::*;

use affix_spell::Spellchecker;
use affix_spell::suggestion::{rank, weigh};

fn sample() -> Spellchecker {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data");
    let aff = std::fs::read_to_string(dir.join("sample.aff")).unwrap();
    let dic = std::fs::read_to_string(dir.join("sample.dic")).unwrap();
    let mut checker = Spellchecker::new();
    checker.parse(&aff, &dic).unwrap();
    checker
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Short words biased toward letters that occur in the sample dictionary.
fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(vec!['a', 'c', 'd', 'e', 'l', 'o', 'r', 't']),
            1 => prop::sample::select(('a'..='z').collect::<Vec<_>>()),
        ],
        1..=5,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn accepted_words_get_no_suggestions(word in arb_word()) {
        let checker = sample();
        if checker.check(&word).unwrap() {
            prop_assert!(checker.suggest(&word).unwrap().is_empty());
        }
    }

    #[test]
    fn suggestions_respect_limit_and_flags(word in arb_word(), limit in 0usize..6) {
        let checker = sample();
        let suggestions = checker.suggest_with_limit(&word, limit).unwrap();
        prop_assert!(suggestions.len() <= limit);
        for suggestion in &suggestions {
            prop_assert!(checker.check(suggestion).unwrap());
            prop_assert!(!checker.has_flag(suggestion, "NOSUGGEST").unwrap());
        }
    }

    #[test]
    fn uppercase_of_accepted_lowercase_without_keepcase(word in arb_word()) {
        let checker = sample();
        if checker.check_exact(&word).unwrap() && !checker.has_flag(&word, "KEEPCASE").unwrap() {
            let capitalized = {
                let mut chars = word.chars();
                chars.next().map(|c| c.to_uppercase().chain(chars).collect::<String>())
            };
            if let Some(capitalized) = capitalized {
                if !checker.has_flag(&capitalized, "KEEPCASE").unwrap() {
                    prop_assert!(checker.check(&word.to_uppercase()).unwrap());
                }
            }
        }
    }

    #[test]
    fn ranking_orders_by_weight(generated in prop::collection::vec("[a-e]", 0..30)) {
        let ranked = rank(weigh(generated.clone()));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
        let total: usize = ranked.iter().map(|c| c.weight).sum();
        prop_assert_eq!(total, generated.len());
    }
}
