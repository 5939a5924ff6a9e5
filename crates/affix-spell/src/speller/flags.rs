// Flag evaluation: does a word (or one homograph) carry a named flag

use affix_core::RuleSet;

use crate::speller::DictionaryHandle;

/// Resolves named flags against a dictionary.
#[derive(Clone, Copy)]
pub struct FlagEvaluator<'a> {
    dict: &'a dyn DictionaryHandle,
}

impl<'a> FlagEvaluator<'a> {
    pub fn new(dict: &'a dyn DictionaryHandle) -> Self {
        Self { dict }
    }

    /// Union of the rule codes of every homograph of `word`. Empty for
    /// unknown words.
    pub fn rule_union(&self, word: &str) -> RuleSet {
        self.dict
            .homographs(word)
            .into_iter()
            .flatten()
            .flat_map(|codes| codes.iter().copied())
            .collect()
    }

    /// Returns `true` if the flag `flag_name` is set.
    ///
    /// - If the dictionary never declares `flag_name`, the answer is `false`.
    /// - With `codes`, membership is tested in exactly that set (one homograph).
    /// - Without, membership is tested in the union over all homographs, so
    ///   the flag counts if any sense of the word carries it.
    pub fn has_flag(&self, word: &str, flag_name: &str, codes: Option<&RuleSet>) -> bool {
        let Some(code) = self.dict.flags().code(flag_name) else {
            return false;
        };
        match codes {
            Some(codes) => codes.contains(&code),
            None => self
                .dict
                .homographs(word)
                .into_iter()
                .flatten()
                .any(|codes| codes.contains(&code)),
        }
    }
}
