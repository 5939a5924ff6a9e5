// Case forms of a word token: trimming, upper/lower, capitalization

/// Strip leading and trailing Unicode whitespace.
pub fn trim_word(word: &str) -> &str {
    word.trim()
}

/// Full Unicode upper-casing (may change the length, e.g. `ß` -> `SS`).
pub fn to_upper(word: &str) -> String {
    word.to_uppercase()
}

/// Full Unicode lower-casing.
pub fn to_lower(word: &str) -> String {
    word.to_lowercase()
}

/// First code point upper-cased, the remainder lower-cased: "hELLO" -> "Hello".
///
/// An empty word stays empty.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Returns `true` if `word` equals its own upper-cased form and contains at
/// least one cased character.
///
/// Words made only of digits or punctuation ("123", "...") are not all-upper.
pub fn is_all_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && to_upper(word) == word
}

/// Word length as used by the `COMPOUNDMIN` threshold (Unicode scalar values).
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
