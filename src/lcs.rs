use crate::utils::DPMatrix;

/// Fills the longest-common-subsequence table for `pred` against `gold`.
///
/// The table has `pred.len() + 1` rows and `gold.len() + 1` columns. Row 0
/// and column 0 stand for the empty prefix and stay zero, and the bottom-right
/// cell holds the LCS length.
pub fn build_lcs_table<S: AsRef<str>>(pred: &[S], gold: &[S]) -> DPMatrix {
    // Add +1 to both rows and cols to accommodate the empty prefix
    // of the dynamic programming matrix
    let mut dp = DPMatrix::new(pred.len() + 1, gold.len() + 1);
    for i in 1..=pred.len() {
        // Row i extends the best subsequences found so far with
        // pred[i - 1], checked against every word of gold in turn.
        for j in 1..=gold.len() {
            if pred[i - 1].as_ref() == gold[j - 1].as_ref() {
                dp.set(i, j, dp.at(i - 1, j - 1) + 1);
            } else {
                // LCS doesn't need contiguity, so on a mismatch we skip a
                // word from either side and keep whichever prefix did better.
                dp.set(i, j, dp.at(i - 1, j).max(dp.at(i, j - 1)));
            }
        }
    }
    dp
}

pub fn lcs_length<S: AsRef<str>>(pred: &[S], gold: &[S]) -> usize {
    if pred.is_empty() || gold.is_empty() {
        return 0;
    }
    let dp = build_lcs_table(pred, gold);
    dp.at(pred.len(), gold.len()) as usize
}

/// Reconstructs one longest common subsequence by walking the table back
/// from the bottom-right corner.
///
/// On a mismatch the walk moves up only when the cell above is strictly
/// larger, otherwise left. Several subsequences can be equally long; this
/// rule picks one of them deterministically.
pub fn longest_common_subsequence<S: AsRef<str>>(pred: &[S], gold: &[S]) -> Vec<String> {
    if pred.is_empty() || gold.is_empty() {
        return vec![];
    }
    let dp = build_lcs_table(pred, gold);

    let mut lcs: Vec<String> = Vec::with_capacity(dp.at(pred.len(), gold.len()) as usize);
    let mut i = pred.len();
    let mut j = gold.len();
    while i > 0 && j > 0 {
        if pred[i - 1].as_ref() == gold[j - 1].as_ref() {
            lcs.push(pred[i - 1].as_ref().to_string());
            i -= 1;
            j -= 1;
        } else if dp.at(i - 1, j) > dp.at(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    lcs.reverse();
    lcs
}
