//! Runtime decision core of an affix-dictionary spellchecker.
//!
//! - [`speller`] -- flag evaluation and word acceptance (exact, case variants, compounds)
//! - [`suggestion`] -- replacement-table and edit-distance corrections, ranked and truncated
//! - [`handle`] -- [`Spellchecker`], the owner of the active dictionary

pub mod handle;
pub mod speller;
pub mod suggestion;

#[cfg(test)]
mod mock;

pub use handle::Spellchecker;
pub use speller::DictionaryHandle;
pub use speller::acceptance::WordAcceptance;
pub use speller::flags::FlagEvaluator;
pub use suggestion::{SuggestOptions, SuggestionEngine};

/// Error type for spellchecker operations.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// `check`, `check_exact`, or `suggest` was called before a dictionary was activated.
    #[error("no dictionary loaded")]
    NoDictionary,

    /// The dictionary could not be built from its source text or snapshot.
    #[error("failed to build dictionary: {0}")]
    Dictionary(#[from] affix_dict::DictError),
}
