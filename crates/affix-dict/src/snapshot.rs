// Serializable dictionary tables for caching and persistence

use affix_core::FlagTable;
use serde::{Deserialize, Serialize};

use crate::replacement::Replacement;
use crate::table::WordTable;

/// The structured tables of a dictionary, free of compiled state.
///
/// Compound rules are stored as their compiled, unanchored pattern text so
/// that restoring a snapshot never needs the original word-list flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySnapshot {
    pub words: WordTable,
    pub flags: FlagTable,
    #[serde(default)]
    pub compound_rules: Vec<String>,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
    #[serde(default)]
    pub try_chars: Option<String>,
}
