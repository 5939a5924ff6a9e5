// Whole-word pattern matching for compound rules

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::DictError;

/// A whole-string matcher.
///
/// The spellchecker only needs to know whether a word matches; which
/// pattern engine answers that is up to the implementation.
pub trait Matcher: fmt::Debug + Send + Sync {
    fn is_match(&self, word: &str) -> bool;
}

/// A compiled compound rule: an anchored, case-insensitive regular
/// expression over the words that may form a compound.
#[derive(Debug, Clone)]
pub struct CompoundRule {
    source: String,
    regex: Regex,
}

impl CompoundRule {
    /// Compile `source` as a whole-word pattern. Anchors are added here;
    /// `source` must not carry its own.
    pub fn new(source: impl Into<String>) -> Result<Self, DictError> {
        let source = source.into();
        let regex = RegexBuilder::new(&format!("^(?:{source})$"))
            .case_insensitive(true)
            .build()?;
        Ok(Self { source, regex })
    }

    /// The unanchored pattern text, as stored in snapshots.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Matcher for CompoundRule {
    fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}
