//! Affix dictionary tables.
//!
//! This crate owns everything a spellchecker consumes read-only: the word
//! table of homograph rule sets, the named flag table, compound rules, the
//! replacement table, and the edit candidate generator. It also builds those
//! tables from `.aff`/`.dic` text and round-trips them through a
//! serializable snapshot.
//!
//! # Architecture
//!
//! - [`table`] -- spelling to homograph rule sets
//! - [`matcher`] -- whole-word pattern matching (compound rules)
//! - [`replacement`] -- ordered substring replacement table
//! - [`aff`] -- affix file directives
//! - [`dic`] -- word list entries
//! - [`compound`] -- compound rule compilation
//! - [`edits`] -- edit-distance candidate generation
//! - [`snapshot`] -- serializable dictionary tables
//! - [`dictionary`] -- the assembled, immutable [`Dictionary`]

pub mod aff;
pub mod compound;
pub mod dic;
pub mod dictionary;
pub mod edits;
pub mod matcher;
pub mod replacement;
pub mod snapshot;
pub mod table;

pub use dictionary::Dictionary;
pub use edits::EditGenerator;
pub use matcher::{CompoundRule, Matcher};
pub use replacement::Replacement;
pub use snapshot::DictionarySnapshot;
pub use table::WordTable;

/// Error type for building a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("line {line}: {source}")]
    Flag {
        line: usize,
        #[source]
        source: affix_core::FlagError,
    },
    #[error("invalid compound rule {rule:?}: {message}")]
    InvalidCompoundRule { rule: String, message: String },
    #[error("compound pattern does not compile: {0}")]
    Pattern(#[from] regex::Error),
}
