// Word list (.dic) entries: `word/FLAGS [morphological fields]`

use affix_core::{FlagMode, RuleSet};

use crate::DictError;
use crate::table::WordTable;

/// Parse word list text into a word table.
///
/// The optional first line holds the approximate entry count and is used as
/// a capacity hint. Each entry adds one homograph; lines starting with `#`
/// or a tab are comments.
pub fn parse_dic(source: &str, mode: FlagMode) -> Result<WordTable, DictError> {
    let mut lines = source.trim_start_matches('\u{FEFF}').lines().enumerate().peekable();

    let capacity = match lines.peek() {
        Some((_, first)) => first.trim().parse::<usize>().ok(),
        None => None,
    };
    if capacity.is_some() {
        lines.next();
    }
    let mut table = WordTable::with_capacity(capacity.unwrap_or(0));

    for (idx, line) in lines {
        if line.starts_with('\t') || line.trim_start().starts_with('#') {
            continue;
        }
        let Some(entry) = line.split_whitespace().next() else {
            continue;
        };
        let (word, flags) = split_entry(entry);
        if word.is_empty() {
            continue;
        }
        let codes: RuleSet = match flags {
            Some(flags) => mode
                .parse_codes(flags)
                .map_err(|source| DictError::Flag {
                    line: idx + 1,
                    source,
                })?
                .into_iter()
                .collect(),
            None => RuleSet::new(),
        };
        table.add(word, codes);
    }

    Ok(table)
}

/// Split `word/FLAGS` at the first unescaped slash. `\/` is a literal slash
/// inside the word.
fn split_entry(entry: &str) -> (String, Option<&str>) {
    let bytes = entry.as_bytes();
    let mut split_at = None;
    for (pos, &b) in bytes.iter().enumerate() {
        if b == b'/' && (pos == 0 || bytes[pos - 1] != b'\\') {
            split_at = Some(pos);
            break;
        }
    }
    match split_at {
        Some(pos) => (entry[..pos].replace("\\/", "/"), Some(&entry[pos + 1..])),
        None => (entry.replace("\\/", "/"), None),
    }
}
