// Word acceptance: exact match, case variants, compound fallback

use affix_core::case::{capitalize, is_all_upper, to_lower, trim_word, word_len};
use affix_core::flags::{KEEPCASE, ONLYINCOMPOUND};
use tracing::trace;

use crate::speller::DictionaryHandle;
use crate::speller::flags::FlagEvaluator;

/// Decides whether a word is correctly spelled.
#[derive(Clone, Copy)]
pub struct WordAcceptance<'a> {
    dict: &'a dyn DictionaryHandle,
    flags: FlagEvaluator<'a>,
}

impl<'a> WordAcceptance<'a> {
    pub fn new(dict: &'a dyn DictionaryHandle) -> Self {
        Self {
            dict,
            flags: FlagEvaluator::new(dict),
        }
    }

    pub fn flags(&self) -> FlagEvaluator<'a> {
        self.flags
    }

    /// Accept `word` exactly as spelled.
    ///
    /// A present word needs at least one homograph that is not
    /// `ONLYINCOMPOUND`. An absent word is tried against the compound rules,
    /// but only when `COMPOUNDMIN` is declared and the word is at least that
    /// long.
    pub fn check_exact(&self, word: &str) -> bool {
        match self.dict.homographs(word) {
            Some(homographs) => homographs
                .iter()
                .any(|codes| !self.flags.has_flag(word, ONLYINCOMPOUND, Some(codes))),
            None => match self.dict.flags().compound_min() {
                Some(min) if word_len(word) >= min => {
                    self.dict.compound_rules().iter().any(|rule| rule.is_match(word))
                }
                _ => false,
            },
        }
    }

    /// Accept `word` as spelled or through an allowed case variant.
    ///
    /// Order matters:
    /// 1. the trimmed word exactly;
    /// 2. for an all-uppercase word, its capitalized form, unless that form
    ///    is KEEPCASE, which rejects outright without trying the lowercase form;
    /// 3. the lowercase form, unless it is KEEPCASE.
    pub fn check(&self, word: &str) -> bool {
        let trimmed = trim_word(word);
        if self.check_exact(trimmed) {
            return true;
        }

        if is_all_upper(trimmed) {
            let capitalized = capitalize(trimmed);
            if self.flags.has_flag(&capitalized, KEEPCASE, None) {
                trace!(word = trimmed, "capitalized form is KEEPCASE");
                return false;
            }
            if self.check_exact(&capitalized) {
                return true;
            }
        }

        let lower = to_lower(trimmed);
        if lower != trimmed {
            if self.flags.has_flag(&lower, KEEPCASE, None) {
                return false;
            }
            if self.check_exact(&lower) {
                return true;
            }
        }

        false
    }
}
