// LRU cache of per-word suggestion outcomes

use std::num::NonZeroUsize;

use lru::LruCache;

use super::engine::SuggestionOutcome;

/// Caches the limit-independent outcome of a suggestion request, keyed by
/// the word exactly as given.
///
/// Truncation and NOSUGGEST filtering are applied by the caller on every
/// request, so a cached outcome serves any limit. The cache must be cleared
/// whenever the dictionary or the edit distance changes.
pub struct SuggestionCache {
    entries: Option<LruCache<String, SuggestionOutcome>>,
}

impl SuggestionCache {
    /// Create a cache holding up to `capacity` words. A capacity of 0
    /// disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
        }
    }

    pub fn get(&mut self, word: &str) -> Option<&SuggestionOutcome> {
        self.entries.as_mut()?.get(word)
    }

    pub fn insert(&mut self, word: &str, outcome: SuggestionOutcome) {
        if let Some(entries) = self.entries.as_mut() {
            entries.put(word.to_string(), outcome);
        }
    }

    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
