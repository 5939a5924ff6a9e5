// Spell checking: flag evaluation and word acceptance

pub mod acceptance;
pub mod flags;

use affix_core::{FlagTable, RuleSet};
use affix_dict::{Dictionary, Matcher, Replacement};
use hashbrown::HashMap;

use acceptance::WordAcceptance;

/// Read-only view of a dictionary, as consumed by acceptance and suggestion.
///
/// Implementations must be deterministic: the same word always yields the
/// same homographs and the same generated candidates in the same order.
pub trait DictionaryHandle {
    /// Homographs of `word` (case-sensitive), or `None` if absent.
    fn homographs(&self, word: &str) -> Option<&[RuleSet]>;

    /// The named flag table.
    fn flags(&self) -> &FlagTable;

    /// Compound rules, in priority order.
    fn compound_rules(&self) -> &[Box<dyn Matcher>];

    /// The replacement table, in priority order.
    fn replacements(&self) -> &[Replacement];

    /// Dictionary-valid words within `max_distance` edits of `word`.
    ///
    /// A word appears once per distinct edit path that produced it.
    fn find_similar_words(&self, word: &str, max_distance: usize) -> Vec<String>;
}

impl DictionaryHandle for Dictionary {
    fn homographs(&self, word: &str) -> Option<&[RuleSet]> {
        Dictionary::homographs(self, word)
    }

    fn flags(&self) -> &FlagTable {
        Dictionary::flags(self)
    }

    fn compound_rules(&self) -> &[Box<dyn Matcher>] {
        Dictionary::compound_rules(self)
    }

    fn replacements(&self) -> &[Replacement] {
        Dictionary::replacements(self)
    }

    /// Edits are validated with the full case-aware acceptance check; each
    /// distinct edit is checked once.
    fn find_similar_words(&self, word: &str, max_distance: usize) -> Vec<String> {
        let acceptance = WordAcceptance::new(self);
        let mut known: HashMap<String, bool> = HashMap::new();
        let mut similar = Vec::new();
        for candidate in self.generator().edits(word, max_distance) {
            let accepted = match known.get(candidate.as_str()) {
                Some(&accepted) => accepted,
                None => {
                    let accepted = acceptance.check(&candidate);
                    known.insert(candidate.clone(), accepted);
                    accepted
                }
            };
            if accepted {
                similar.push(candidate);
            }
        }
        similar
    }
}
