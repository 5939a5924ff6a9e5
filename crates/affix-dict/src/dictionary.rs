// Dictionary: the assembled, immutable tables a spellchecker reads from

use std::fmt;

use affix_core::{FlagTable, RuleSet};
use tracing::{debug, debug_span};

use crate::DictError;
use crate::aff::parse_aff;
use crate::compound::compile_rules;
use crate::dic::parse_dic;
use crate::edits::EditGenerator;
use crate::matcher::{CompoundRule, Matcher};
use crate::replacement::Replacement;
use crate::snapshot::DictionarySnapshot;
use crate::table::WordTable;

/// A loaded dictionary. Immutable once built; share it behind an `Arc`.
pub struct Dictionary {
    words: WordTable,
    flags: FlagTable,
    compound_sources: Vec<String>,
    compound_rules: Vec<Box<dyn Matcher>>,
    replacements: Vec<Replacement>,
    try_chars: Option<String>,
    generator: EditGenerator,
}

impl Dictionary {
    /// Build a dictionary from affix file and word list text.
    pub fn parse(aff: &str, dic: &str) -> Result<Self, DictError> {
        let _span =
            debug_span!("parse_dictionary", aff_len = aff.len(), dic_len = dic.len()).entered();

        let affix = parse_aff(aff)?;
        let words = parse_dic(dic, affix.flag_mode)?;
        let compound_sources = compile_rules(&affix.compound_rules, &words, affix.flag_mode)?;

        let dictionary = Self::assemble(
            words,
            affix.flags,
            compound_sources,
            affix.replacements,
            affix.try_chars,
        )?;
        debug!(
            words = dictionary.words.len(),
            flags = dictionary.flags.len(),
            compound_rules = dictionary.compound_rules.len(),
            replacements = dictionary.replacements.len(),
            "dictionary parsed"
        );
        Ok(dictionary)
    }

    /// Rebuild a dictionary from a snapshot.
    pub fn from_snapshot(snapshot: DictionarySnapshot) -> Result<Self, DictError> {
        let DictionarySnapshot {
            mut words,
            flags,
            compound_rules,
            replacements,
            try_chars,
        } = snapshot;
        words.remove_empty();
        Self::assemble(words, flags, compound_rules, replacements, try_chars)
    }

    /// Export the structured tables.
    pub fn snapshot(&self) -> DictionarySnapshot {
        DictionarySnapshot {
            words: self.words.clone(),
            flags: self.flags.clone(),
            compound_rules: self.compound_sources.clone(),
            replacements: self.replacements.clone(),
            try_chars: self.try_chars.clone(),
        }
    }

    fn assemble(
        words: WordTable,
        flags: FlagTable,
        compound_sources: Vec<String>,
        replacements: Vec<Replacement>,
        try_chars: Option<String>,
    ) -> Result<Self, DictError> {
        let compound_rules = compound_sources
            .iter()
            .map(|source| {
                CompoundRule::new(source.as_str()).map(|rule| Box::new(rule) as Box<dyn Matcher>)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let generator = match try_chars.as_deref() {
            Some(chars) if !chars.is_empty() => EditGenerator::new(chars),
            _ => EditGenerator::default(),
        };
        Ok(Self {
            words,
            flags,
            compound_sources,
            compound_rules,
            replacements,
            try_chars,
            generator,
        })
    }

    pub fn words(&self) -> &WordTable {
        &self.words
    }

    /// Homographs of `word`, or `None` if the spelling is absent.
    pub fn homographs(&self, word: &str) -> Option<&[RuleSet]> {
        self.words.homographs(word)
    }

    pub fn flags(&self) -> &FlagTable {
        &self.flags
    }

    pub fn compound_rules(&self) -> &[Box<dyn Matcher>] {
        &self.compound_rules
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn generator(&self) -> &EditGenerator {
        &self.generator
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &format!("{} entries", self.words.len()))
            .field("flags", &self.flags)
            .field("compound_rules", &self.compound_sources)
            .field("replacements", &self.replacements.len())
            .finish_non_exhaustive()
    }
}
