// In-memory DictionaryHandle for unit tests

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use affix_core::flags::{COMPOUNDMIN, KEEPCASE, NOSUGGEST, ONLYINCOMPOUND};
use affix_core::{FlagTable, RuleCode, RuleSet};
use affix_dict::{CompoundRule, Matcher, Replacement};
use hashbrown::HashMap;

use crate::speller::DictionaryHandle;

pub(crate) const KEEP: char = 'K';
pub(crate) const COMPOUND_ONLY: char = 'C';
pub(crate) const NO_SUGGEST: char = 'N';

/// A compound rule that counts how often it is consulted.
#[derive(Debug)]
struct CountingRule {
    rule: CompoundRule,
    calls: Arc<AtomicUsize>,
}

impl Matcher for CountingRule {
    fn is_match(&self, word: &str) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.rule.is_match(word)
    }
}

/// A dictionary whose similar-word generator returns a canned sequence.
#[derive(Default)]
pub(crate) struct MockDictionary {
    words: HashMap<String, Vec<RuleSet>>,
    flags: FlagTable,
    compound_rules: Vec<Box<dyn Matcher>>,
    replacements: Vec<Replacement>,
    similar: Vec<String>,
    pub generator_calls: Cell<usize>,
    matcher_calls: Arc<AtomicUsize>,
}

impl MockDictionary {
    /// A dictionary declaring KEEPCASE, ONLYINCOMPOUND and NOSUGGEST.
    pub fn new() -> Self {
        let mut dict = Self::default();
        dict.flags.insert(KEEPCASE, RuleCode(KEEP as u32));
        dict.flags.insert(ONLYINCOMPOUND, RuleCode(COMPOUND_ONLY as u32));
        dict.flags.insert(NOSUGGEST, RuleCode(NO_SUGGEST as u32));
        dict
    }

    /// Add one homograph of `word` carrying the flag characters in `flags`.
    pub fn word(mut self, word: &str, flags: &str) -> Self {
        let codes: RuleSet = flags.chars().map(|c| RuleCode(c as u32)).collect();
        self.words.entry(word.to_string()).or_default().push(codes);
        self
    }

    pub fn compound_min(mut self, min: u32) -> Self {
        self.flags.insert(COMPOUNDMIN, RuleCode(min));
        self
    }

    pub fn compound_rule(mut self, pattern: &str) -> Self {
        let rule = CompoundRule::new(pattern).expect("valid test pattern");
        self.compound_rules.push(Box::new(CountingRule {
            rule,
            calls: Arc::clone(&self.matcher_calls),
        }));
        self
    }

    /// Total `is_match` calls across all compound rules.
    pub fn matcher_calls(&self) -> usize {
        self.matcher_calls.load(Ordering::Relaxed)
    }

    pub fn replacement(mut self, from: &str, to: &str) -> Self {
        self.replacements.push(Replacement::new(from, to));
        self
    }

    pub fn similar(mut self, words: &[&str]) -> Self {
        self.similar = words.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn without_flags(mut self) -> Self {
        self.flags = FlagTable::new();
        self
    }
}

impl DictionaryHandle for MockDictionary {
    fn homographs(&self, word: &str) -> Option<&[RuleSet]> {
        self.words.get(word).map(Vec::as_slice)
    }

    fn flags(&self) -> &FlagTable {
        &self.flags
    }

    fn compound_rules(&self) -> &[Box<dyn Matcher>] {
        &self.compound_rules
    }

    fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    fn find_similar_words(&self, _word: &str, _max_distance: usize) -> Vec<String> {
        self.generator_calls.set(self.generator_calls.get() + 1);
        self.similar.clone()
    }
}
