// Suggestion engine: replacement table pass, then ranked edit candidates

use affix_core::flags::NOSUGGEST;
use tracing::{debug, debug_span};

use crate::speller::DictionaryHandle;
use crate::speller::acceptance::WordAcceptance;
use crate::speller::flags::FlagEvaluator;

use super::ranking::{SuggestionCandidate, rank, weigh};

/// Suggestion options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Number of ranked candidates considered before NOSUGGEST filtering.
    pub max_suggestions: usize,
    /// Radius passed to the similar-word generator.
    pub max_edit_distance: usize,
    /// Number of words whose suggestion outcome is cached. 0 disables caching.
    pub cache_capacity: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            max_edit_distance: 2,
            cache_capacity: 256,
        }
    }
}

/// The limit-independent part of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The word is accepted; nothing to suggest.
    Correct,
    /// A replacement table entry produced an accepted word.
    Replacement(String),
    /// Edit candidates, best first, before truncation and filtering.
    Ranked(Vec<SuggestionCandidate>),
}

/// Produces corrections for rejected words.
pub struct SuggestionEngine<'a> {
    dict: &'a dyn DictionaryHandle,
    acceptance: WordAcceptance<'a>,
    flags: FlagEvaluator<'a>,
    max_edit_distance: usize,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(dict: &'a dyn DictionaryHandle) -> Self {
        let acceptance = WordAcceptance::new(dict);
        Self {
            dict,
            acceptance,
            flags: acceptance.flags(),
            max_edit_distance: SuggestOptions::default().max_edit_distance,
        }
    }

    pub fn with_max_edit_distance(mut self, max_edit_distance: usize) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }

    /// Suggest up to `limit` corrections for `word`, best first.
    ///
    /// Returns an empty list for accepted words. May return fewer than
    /// `limit` entries even when more candidates exist: NOSUGGEST entries are
    /// dropped after truncation, without backfill.
    pub fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        let outcome = self.outcome(word);
        self.select(&outcome, limit)
    }

    /// Run acceptance, the replacement pass, and edit-candidate ranking.
    pub fn outcome(&self, word: &str) -> SuggestionOutcome {
        let _span = debug_span!("suggest", word).entered();

        if self.acceptance.check(word) {
            debug!("word accepted");
            return SuggestionOutcome::Correct;
        }

        for replacement in self.dict.replacements() {
            if let Some(candidate) = replacement.apply(word) {
                if self.acceptance.check(&candidate) {
                    debug!(from = %replacement.from, to = %replacement.to, "replacement hit");
                    return SuggestionOutcome::Replacement(candidate);
                }
            }
        }

        let generated = self.dict.find_similar_words(word, self.max_edit_distance);
        let generated_count = generated.len();
        let ranked = rank(weigh(generated));
        debug!(generated = generated_count, distinct = ranked.len(), "edit candidates ranked");
        SuggestionOutcome::Ranked(ranked)
    }

    /// Apply `limit` to an outcome: truncate the ranking first, then drop
    /// NOSUGGEST words.
    pub fn select(&self, outcome: &SuggestionOutcome, limit: usize) -> Vec<String> {
        match outcome {
            SuggestionOutcome::Correct => Vec::new(),
            SuggestionOutcome::Replacement(candidate) => vec![candidate.clone()],
            SuggestionOutcome::Ranked(ranked) => ranked
                .iter()
                .take(limit)
                .filter(|candidate| !self.flags.has_flag(&candidate.word, NOSUGGEST, None))
                .map(|candidate| candidate.word.clone())
                .collect(),
        }
    }
}
