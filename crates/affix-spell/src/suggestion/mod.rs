// Suggestion generation
//
// Produces correction candidates for rejected words:
//   - `engine`: replacement table pass, then ranked edit-distance candidates
//   - `ranking`: candidate weighting by generation path count, tie-breaking
//   - `cache`: per-word outcome cache held by the spellchecker handle

pub mod cache;
pub mod engine;
pub mod ranking;

pub use cache::SuggestionCache;
pub use engine::{SuggestOptions, SuggestionEngine, SuggestionOutcome};
pub use ranking::{SuggestionCandidate, rank, weigh};
