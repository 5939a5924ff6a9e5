// Rule codes, homograph rule sets, and the named flag table

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FlagError;

/// Flag: this case form must not be substituted by another case variant.
pub const KEEPCASE: &str = "KEEPCASE";
/// Flag: the homograph is valid only inside a compound word.
pub const ONLYINCOMPOUND: &str = "ONLYINCOMPOUND";
/// Flag: never offer the word as a suggestion.
pub const NOSUGGEST: &str = "NOSUGGEST";
/// Numeric entry: minimum word length eligible for compound-rule matching.
pub const COMPOUNDMIN: &str = "COMPOUNDMIN";

/// Opaque identifier linking a dictionary entry to a named flag.
///
/// Numeric flag-table entries such as `COMPOUNDMIN` share this value space
/// and carry their number directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCode(pub u32);

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The rule codes of one homograph.
pub type RuleSet = BTreeSet<RuleCode>;

/// How flag strings are split into rule codes (the affix file `FLAG` directive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlagMode {
    /// One character per flag (also covers `FLAG UTF-8`).
    #[default]
    Char,
    /// Two characters per flag (`FLAG long`).
    Long,
    /// Comma-separated decimal numbers (`FLAG num`).
    Num,
}

impl FlagMode {
    /// Parse the argument of a `FLAG` directive.
    pub fn from_directive(value: &str) -> Result<Self, FlagError> {
        match value.to_ascii_lowercase().as_str() {
            "long" => Ok(FlagMode::Long),
            "num" => Ok(FlagMode::Num),
            "utf-8" | "utf8" | "char" => Ok(FlagMode::Char),
            _ => Err(FlagError::UnknownMode(value.to_string())),
        }
    }

    /// Split a flag string into its rule codes, preserving order.
    pub fn parse_codes(self, flags: &str) -> Result<Vec<RuleCode>, FlagError> {
        match self {
            FlagMode::Char => Ok(flags.chars().map(|c| RuleCode(c as u32)).collect()),
            FlagMode::Long => {
                let chars: Vec<char> = flags.chars().collect();
                if chars.len() % 2 != 0 {
                    return Err(FlagError::OddLongFlag(flags.to_string()));
                }
                chars
                    .chunks(2)
                    .map(|pair| long_code(pair[0], pair[1]))
                    .collect()
            }
            FlagMode::Num => flags
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<u32>()
                        .map(RuleCode)
                        .map_err(|_| FlagError::InvalidNumber(part.to_string()))
                })
                .collect(),
        }
    }

    /// Parse a single flag (e.g. the argument of `KEEPCASE`).
    pub fn parse_code(self, flag: &str) -> Result<RuleCode, FlagError> {
        let codes = self.parse_codes(flag)?;
        match codes.as_slice() {
            [code] => Ok(*code),
            _ => Err(FlagError::NotSingle(flag.to_string())),
        }
    }
}

fn long_code(a: char, b: char) -> Result<RuleCode, FlagError> {
    let (hi, lo) = (a as u32, b as u32);
    if hi > 0xFFFF || lo > 0xFFFF {
        return Err(FlagError::OutOfRange(format!("{a}{b}")));
    }
    Ok(RuleCode((hi << 16) | lo))
}

/// Mapping from flag name to rule code.
///
/// Presence of a name is distinct from its value: a dictionary that never
/// declares `KEEPCASE` has no `KEEPCASE` entry, and every lookup of it
/// resolves to "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagTable {
    entries: BTreeMap<String, RuleCode>,
}

impl FlagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a named entry. Later declarations win.
    pub fn insert(&mut self, name: impl Into<String>, code: RuleCode) {
        self.entries.insert(name.into(), code);
    }

    /// The rule code declared for `name`, if the dictionary uses that flag.
    pub fn code(&self, name: &str) -> Option<RuleCode> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The `COMPOUNDMIN` threshold, if defined.
    pub fn compound_min(&self) -> Option<usize> {
        self.code(COMPOUNDMIN).map(|code| code.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RuleCode)> {
        self.entries.iter().map(|(name, code)| (name.as_str(), *code))
    }
}

impl<S: Into<String>> FromIterator<(S, RuleCode)> for FlagTable {
    fn from_iter<I: IntoIterator<Item = (S, RuleCode)>>(iter: I) -> Self {
        let mut table = FlagTable::new();
        for (name, code) in iter {
            table.insert(name, code);
        }
        table
    }
}
