// Edit-distance candidate generation
//
// Produces every string reachable from a word by single-character edits,
// one occurrence per generation path. Distance n applies single edits to
// every distance n-1 result, so a string reachable by several paths appears
// several times.

/// Alphabet used when the dictionary declares no `TRY` characters.
const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Generator of single-character edit candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGenerator {
    alphabet: Vec<char>,
}

impl Default for EditGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}

impl EditGenerator {
    /// Create a generator over `alphabet`. Repeated characters are dropped,
    /// keeping first occurrences.
    pub fn new(alphabet: &str) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in alphabet.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        Self { alphabet: chars }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Append all single edits of `word` to `out`.
    ///
    /// For each split position, in order: deletion, transposition of the
    /// next two characters (when they differ), replacement of the next
    /// character by each different alphabet letter, and insertion of each
    /// alphabet letter.
    pub fn single_edits(&self, word: &str, out: &mut Vec<String>) {
        let chars: Vec<char> = word.chars().collect();
        for i in 0..=chars.len() {
            let (head, tail) = chars.split_at(i);
            let head: String = head.iter().collect();

            if let Some((&first, rest)) = tail.split_first() {
                let rest_str: String = rest.iter().collect();

                out.push(format!("{head}{rest_str}"));

                if let Some((&second, after)) = rest.split_first() {
                    if second != first {
                        let after: String = after.iter().collect();
                        out.push(format!("{head}{second}{first}{after}"));
                    }
                }

                for &letter in &self.alphabet {
                    if letter != first {
                        out.push(format!("{head}{letter}{rest_str}"));
                    }
                }
            }

            let tail: String = tail.iter().collect();
            for &letter in &self.alphabet {
                out.push(format!("{head}{letter}{tail}"));
            }
        }
    }

    /// All edits of `word` up to `max_distance`, distance 1 first.
    pub fn edits(&self, word: &str, max_distance: usize) -> Vec<String> {
        let mut all = Vec::new();
        let mut frontier = vec![word.to_string()];
        for _ in 0..max_distance {
            let mut next = Vec::new();
            for candidate in &frontier {
                self.single_edits(candidate, &mut next);
            }
            all.extend(next.iter().cloned());
            frontier = next;
        }
        all
    }
}
