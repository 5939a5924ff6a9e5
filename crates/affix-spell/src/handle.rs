// Spellchecker: owner of the active dictionary.
//
// Design notes:
// - The active dictionary is an `Arc<Dictionary>` slot. Activating a new one
//   (`use_dictionary`, `use_snapshot`, `parse`) swaps the `Arc` wholesale;
//   the old tables are never mutated, so clones handed out earlier stay valid.
// - Swapping takes `&mut self`. Hosts that share one spellchecker between
//   threads wrap it in a lock; the core itself does no locking.
// - Acceptance and suggestion objects are created per call, borrowing the
//   active dictionary.
// - Suggestion outcomes are cached in a `RefCell` so `&self` methods can
//   fill the cache.

use std::cell::RefCell;
use std::sync::Arc;

use affix_dict::{Dictionary, DictionarySnapshot};
use tracing::debug;

use crate::SpellError;
use crate::speller::acceptance::WordAcceptance;
use crate::speller::flags::FlagEvaluator;
use crate::suggestion::{SuggestOptions, SuggestionCache, SuggestionEngine};

/// Top-level handle: holds at most one active dictionary and answers
/// acceptance and suggestion queries against it.
pub struct Spellchecker {
    dictionary: Option<Arc<Dictionary>>,
    options: SuggestOptions,
    cache: RefCell<SuggestionCache>,
}

impl Default for Spellchecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Spellchecker {
    /// Create a spellchecker with no dictionary loaded.
    pub fn new() -> Self {
        Self::with_options(SuggestOptions::default())
    }

    pub fn with_options(options: SuggestOptions) -> Self {
        Self {
            cache: RefCell::new(SuggestionCache::new(options.cache_capacity)),
            dictionary: None,
            options,
        }
    }

    // =========================================================================
    // Dictionary lifecycle
    // =========================================================================

    /// Activate a prebuilt dictionary, returning the previously active one.
    pub fn use_dictionary(&mut self, dictionary: Arc<Dictionary>) -> Option<Arc<Dictionary>> {
        debug!(words = dictionary.words().len(), "activating dictionary");
        self.cache.get_mut().clear();
        self.dictionary.replace(dictionary)
    }

    /// Rebuild a dictionary from a snapshot and activate it.
    pub fn use_snapshot(&mut self, snapshot: DictionarySnapshot) -> Result<(), SpellError> {
        let dictionary = Dictionary::from_snapshot(snapshot)?;
        self.use_dictionary(Arc::new(dictionary));
        Ok(())
    }

    /// Build a dictionary from affix file and word list text, activate it,
    /// and return its tables for caching or persistence.
    ///
    /// On error the previously active dictionary stays active.
    pub fn parse(&mut self, aff: &str, dic: &str) -> Result<DictionarySnapshot, SpellError> {
        let dictionary = Dictionary::parse(aff, dic)?;
        let snapshot = dictionary.snapshot();
        self.use_dictionary(Arc::new(dictionary));
        Ok(snapshot)
    }

    /// The active dictionary.
    pub fn dictionary(&self) -> Result<&Arc<Dictionary>, SpellError> {
        self.dictionary.as_ref().ok_or(SpellError::NoDictionary)
    }

    pub fn is_loaded(&self) -> bool {
        self.dictionary.is_some()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check whether a word is correctly spelled, including case variants.
    pub fn check(&self, word: &str) -> Result<bool, SpellError> {
        let dictionary = self.dictionary()?;
        Ok(WordAcceptance::new(dictionary.as_ref()).check(word))
    }

    /// Check a word exactly as spelled.
    pub fn check_exact(&self, word: &str) -> Result<bool, SpellError> {
        let dictionary = self.dictionary()?;
        Ok(WordAcceptance::new(dictionary.as_ref()).check_exact(word))
    }

    /// Whether any homograph of `word` carries the named flag.
    pub fn has_flag(&self, word: &str, flag_name: &str) -> Result<bool, SpellError> {
        let dictionary = self.dictionary()?;
        Ok(FlagEvaluator::new(dictionary.as_ref()).has_flag(word, flag_name, None))
    }

    /// Suggest corrections using the configured maximum.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>, SpellError> {
        self.suggest_with_limit(word, self.options.max_suggestions)
    }

    /// Suggest up to `limit` corrections for `word`, best first.
    pub fn suggest_with_limit(&self, word: &str, limit: usize) -> Result<Vec<String>, SpellError> {
        let dictionary = self.dictionary()?;
        let engine = SuggestionEngine::new(dictionary.as_ref())
            .with_max_edit_distance(self.options.max_edit_distance);

        let mut cache = self.cache.borrow_mut();
        if let Some(outcome) = cache.get(word) {
            debug!(word, "suggestion cache hit");
            return Ok(engine.select(outcome, limit));
        }
        let outcome = engine.outcome(word);
        let suggestions = engine.select(&outcome, limit);
        cache.insert(word, outcome);
        Ok(suggestions)
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    /// Set the default number of suggestions returned by [`suggest`](Self::suggest).
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.options.max_suggestions = max_suggestions;
    }

    pub fn set_max_edit_distance(&mut self, max_edit_distance: usize) {
        if self.options.max_edit_distance != max_edit_distance {
            self.options.max_edit_distance = max_edit_distance;
            self.cache.get_mut().clear();
        }
    }

    /// Resize the suggestion cache, dropping its contents. 0 disables it.
    pub fn set_cache_capacity(&mut self, capacity: usize) {
        self.options.cache_capacity = capacity;
        self.cache = RefCell::new(SuggestionCache::new(capacity));
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}
