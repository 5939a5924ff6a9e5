// Candidate weighting and ranking

use hashbrown::HashMap;

/// A generated correction and the number of edit paths that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCandidate {
    pub word: String,
    pub weight: usize,
}

/// Count occurrences of each distinct candidate.
///
/// The result lists candidates in order of first appearance.
pub fn weigh(generated: Vec<String>) -> Vec<SuggestionCandidate> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut candidates: Vec<SuggestionCandidate> = Vec::new();
    for word in generated {
        match index.get(word.as_str()) {
            Some(&pos) => candidates[pos].weight += 1,
            None => {
                index.insert(word.clone(), candidates.len());
                candidates.push(SuggestionCandidate { word, weight: 1 });
            }
        }
    }
    candidates
}

/// Order candidates best first.
///
/// Stable ascending sort by weight, then the whole sequence reversed: among
/// equal weights, the candidate that appeared first ends up last. This is
/// not the same as a stable descending sort.
pub fn rank(mut candidates: Vec<SuggestionCandidate>) -> Vec<SuggestionCandidate> {
    candidates.sort_by_key(|candidate| candidate.weight);
    candidates.reverse();
    candidates
}
