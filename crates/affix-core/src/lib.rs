//! Shared types for affix dictionary spellchecking.
//!
//! - [`case`] -- case forms of a word token (trim, upper, lower, capitalize)
//! - [`flags`] -- rule codes, homograph rule sets, and the named flag table

pub mod case;
pub mod flags;

pub use flags::{FlagMode, FlagTable, RuleCode, RuleSet};

/// Error type for flag-string parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    #[error("unknown FLAG mode: {0}")]
    UnknownMode(String),
    #[error("long flag string has an odd number of characters: {0}")]
    OddLongFlag(String),
    #[error("invalid numeric flag: {0}")]
    InvalidNumber(String),
    #[error("long flag character out of range: {0}")]
    OutOfRange(String),
    #[error("expected exactly one flag, got: {0}")]
    NotSingle(String),
}
