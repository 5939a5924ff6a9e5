// Compound rule compilation: flag patterns -> word-level regular expressions
//
// A rule such as `n*1t` is a pattern over rule codes. Each code is replaced
// by the alternation of every spelling that carries it, producing a pattern
// that matches whole compound words.

use std::collections::{BTreeMap, BTreeSet};

use affix_core::{FlagMode, RuleCode};

use crate::DictError;
use crate::table::WordTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Code(RuleCode),
    Op(char),
}

/// Compile raw `COMPOUNDRULE` patterns into unanchored regex sources.
pub fn compile_rules(
    patterns: &[String],
    words: &WordTable,
    mode: FlagMode,
) -> Result<Vec<String>, DictError> {
    let tokenized = patterns
        .iter()
        .map(|pattern| tokenize(pattern, mode))
        .collect::<Result<Vec<_>, _>>()?;

    let wanted: BTreeSet<RuleCode> = tokenized
        .iter()
        .flatten()
        .filter_map(|token| match token {
            Token::Code(code) => Some(*code),
            Token::Op(_) => None,
        })
        .collect();

    // Sorted so compiled sources are stable across runs.
    let mut members: BTreeMap<RuleCode, BTreeSet<&str>> =
        wanted.iter().map(|code| (*code, BTreeSet::new())).collect();
    for (word, homographs) in words.iter() {
        for codes in homographs {
            for code in codes.intersection(&wanted) {
                if let Some(set) = members.get_mut(code) {
                    set.insert(word);
                }
            }
        }
    }

    Ok(tokenized
        .iter()
        .map(|tokens| {
            let mut source = String::new();
            for token in tokens {
                match token {
                    Token::Op(op) => source.push(*op),
                    Token::Code(code) => {
                        let alternatives: Vec<String> = members
                            .get(code)
                            .into_iter()
                            .flatten()
                            .map(|word| regex::escape(word))
                            .collect();
                        source.push_str("(?:");
                        source.push_str(&alternatives.join("|"));
                        source.push(')');
                    }
                }
            }
            source
        })
        .collect())
}

fn tokenize(pattern: &str, mode: FlagMode) -> Result<Vec<Token>, DictError> {
    let invalid = |message: &str| DictError::InvalidCompoundRule {
        rule: pattern.to_string(),
        message: message.to_string(),
    };

    let mut tokens = Vec::new();
    match mode {
        FlagMode::Char => {
            for c in pattern.chars() {
                tokens.push(match c {
                    '*' | '?' | '(' | ')' => Token::Op(c),
                    _ => Token::Code(RuleCode(c as u32)),
                });
            }
        }
        FlagMode::Long | FlagMode::Num => {
            let mut rest = pattern;
            while let Some(c) = rest.chars().next() {
                match c {
                    '*' | '?' => {
                        tokens.push(Token::Op(c));
                        rest = &rest[1..];
                    }
                    '(' => {
                        let close = rest.find(')').ok_or_else(|| invalid("unclosed '('"))?;
                        let code = mode
                            .parse_code(&rest[1..close])
                            .map_err(|err| invalid(&err.to_string()))?;
                        tokens.push(Token::Code(code));
                        rest = &rest[close + 1..];
                    }
                    _ => return Err(invalid("flags must be parenthesized")),
                }
            }
        }
    }
    Ok(tokens)
}
