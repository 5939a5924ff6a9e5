// Replacement table entries (`REP from to`)

use serde::{Deserialize, Serialize};

/// One replacement table entry. Table position is its priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Replace the first occurrence of `from` in `word`, or `None` if it
    /// does not occur.
    pub fn apply(&self, word: &str) -> Option<String> {
        let start = word.find(self.from.as_str())?;
        let mut out = String::with_capacity(word.len() + self.to.len());
        out.push_str(&word[..start]);
        out.push_str(&self.to);
        out.push_str(&word[start + self.from.len()..]);
        Some(out)
    }
}
