use std::collections::HashMap;

pub fn get_ngram_counts<S: AsRef<str>>(ngrams_vec: &[S]) -> HashMap<&str, usize> {
    let mut hashmap: HashMap<&str, usize> = HashMap::new();
    for ngram in ngrams_vec {
        *hashmap.entry(ngram.as_ref()).or_insert(0) += 1;
    }
    hashmap
}

fn get_matches_clipped(pred_map: &HashMap<&str, usize>, gold_map: &HashMap<&str, usize>) -> usize {
    let mut matches: usize = 0;
    for (ng, pred_count) in pred_map {
        if let Some(gold_count) = gold_map.get(ng) {
            matches += pred_count.min(gold_count);
        }
    }
    matches
}

/// Size of the multiset intersection of `candidate` and `reference`.
///
/// Every distinct item contributes `min(candidate count, reference count)`,
/// so repeated tokens are matched at most as often as the other side has
/// them.
pub fn overlap_count<S: AsRef<str>>(candidate: &[S], reference: &[S]) -> usize {
    if candidate.is_empty() || reference.is_empty() {
        return 0;
    }
    let candidate_counts = get_ngram_counts(candidate);
    let reference_counts = get_ngram_counts(reference);
    get_matches_clipped(&candidate_counts, &reference_counts)
}
