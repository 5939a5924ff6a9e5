// Word table: spelling -> ordered homograph rule sets

use std::collections::BTreeMap;

use affix_core::RuleSet;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize, Serializer};

/// Case-sensitive mapping from spelling to its homographs.
///
/// Every present spelling has at least one homograph; a homograph with no
/// flags is an empty rule set, not a missing entry. Serializes as a map
/// with spellings in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordTable {
    #[serde(serialize_with = "serialize_sorted")]
    entries: HashMap<String, Vec<RuleSet>>,
}

fn serialize_sorted<S: Serializer>(
    entries: &HashMap<String, Vec<RuleSet>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let sorted: BTreeMap<&str, &Vec<RuleSet>> = entries
        .iter()
        .map(|(word, homographs)| (word.as_str(), homographs))
        .collect();
    sorted.serialize(serializer)
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Append a homograph for `word`. Repeated spellings keep their order.
    pub fn add(&mut self, word: impl Into<String>, codes: RuleSet) {
        self.entries.entry(word.into()).or_default().push(codes);
    }

    /// All homographs of `word`, or `None` if the spelling is absent.
    pub fn homographs(&self, word: &str) -> Option<&[RuleSet]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RuleSet])> {
        self.entries
            .iter()
            .map(|(word, homographs)| (word.as_str(), homographs.as_slice()))
    }

    /// Drop spellings that carry no homographs (only reachable through
    /// deserialized input).
    pub(crate) fn remove_empty(&mut self) {
        self.entries.retain(|_, homographs| !homographs.is_empty());
    }
}
