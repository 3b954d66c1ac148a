use crate::lcs::lcs_length;
use crate::overlap::overlap_count;
use crate::utils::Sequence;
use serde::{Deserialize, Serialize};

/// Precision, recall and f-measure for one ROUGE variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RougeScore {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f-measure")]
    pub f_measure: f64,
}

impl From<RougeScore> for (f64, f64, f64) {
    fn from(score: RougeScore) -> Self {
        (score.precision, score.recall, score.f_measure)
    }
}

impl From<(f64, f64, f64)> for RougeScore {
    fn from((precision, recall, f_measure): (f64, f64, f64)) -> Self {
        RougeScore {
            precision,
            recall,
            f_measure,
        }
    }
}

pub fn precision_calculation(overlap_count: usize, candidate_count: usize) -> f64 {
    if candidate_count == 0 {
        return 0.0;
    }
    overlap_count as f64 / candidate_count as f64
}

pub fn recall_calculation(overlap_count: usize, reference_count: usize) -> f64 {
    if reference_count == 0 {
        return 0.0;
    }
    overlap_count as f64 / reference_count as f64
}

pub fn f_measure_calculation(precision: f64, recall: f64) -> f64 {
    if precision == 0.0 || recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

/// Turns an overlap count and the two side lengths into a score.
/// An empty side scores zero rather than dividing by zero.
pub fn rouge_calculation(
    overlap_count: usize,
    candidate_count: usize,
    reference_count: usize,
) -> RougeScore {
    let precision = precision_calculation(overlap_count, candidate_count);
    let recall = recall_calculation(overlap_count, reference_count);
    RougeScore {
        precision,
        recall,
        f_measure: f_measure_calculation(precision, recall),
    }
}

pub fn rouge1_seq(pred: &Sequence, gold: &Sequence) -> RougeScore {
    let overlap = overlap_count(&pred.word_vector, &gold.word_vector);
    rouge_calculation(overlap, pred.n_words, gold.n_words)
}

pub fn rouge2_seq(pred: &Sequence, gold: &Sequence) -> RougeScore {
    let pred_bigrams = pred.bigrams();
    let gold_bigrams = gold.bigrams();
    let overlap = overlap_count(&pred_bigrams, &gold_bigrams);
    rouge_calculation(overlap, pred_bigrams.len(), gold_bigrams.len())
}

pub fn rouge_l_seq(pred: &Sequence, gold: &Sequence) -> RougeScore {
    let lcs_len = lcs_length(&pred.word_vector, &gold.word_vector);
    rouge_calculation(lcs_len, pred.n_words, gold.n_words)
}

/// Unigram overlap between `candidate` and `reference`.
pub fn rouge1(candidate: &str, reference: &str) -> RougeScore {
    rouge1_seq(&Sequence::new(candidate), &Sequence::new(reference))
}

/// Bigram overlap between `candidate` and `reference`.
pub fn rouge2(candidate: &str, reference: &str) -> RougeScore {
    rouge2_seq(&Sequence::new(candidate), &Sequence::new(reference))
}

/// Longest-common-subsequence score between `candidate` and `reference`.
pub fn rouge_l(candidate: &str, reference: &str) -> RougeScore {
    rouge_l_seq(&Sequence::new(candidate), &Sequence::new(reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CANDIDATE: &str = "the quick brown fox jumps over the lazy dog";
    const REFERENCE: &str = "a fast brown dog jumps over a sleeping fox";

    fn close_enough(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn all_zero(score: RougeScore) -> bool {
        score == RougeScore::default()
    }

    #[test]
    fn test_worked_example_rouge1() {
        let score = rouge1(CANDIDATE, REFERENCE);
        // brown, fox, jumps, over, dog -> 5 of 9 on both sides
        assert!(close_enough(score.precision, 5.0 / 9.0, 1e-9));
        assert!(close_enough(score.recall, 5.0 / 9.0, 1e-9));
        assert!(close_enough(score.f_measure, 5.0 / 9.0, 1e-9));
        assert!(close_enough(score.f_measure, 0.556, 1e-3));
    }

    #[test]
    fn test_worked_example_rouge2() {
        let score = rouge2(CANDIDATE, REFERENCE);
        // only "jumps over" is shared, 8 bigrams per side
        assert!(close_enough(score.precision, 0.125, 1e-9));
        assert!(close_enough(score.recall, 0.125, 1e-9));
        assert!(close_enough(score.f_measure, 0.125, 1e-9));
    }

    #[test]
    fn test_worked_example_rouge_l() {
        let score = rouge_l(CANDIDATE, REFERENCE);
        // LCS = brown jumps over
        assert!(close_enough(score.precision, 1.0 / 3.0, 1e-9));
        assert!(close_enough(score.recall, 1.0 / 3.0, 1e-9));
        assert!(close_enough(score.f_measure, 1.0 / 3.0, 1e-9));
    }

    #[test]
    fn test_rouge_l_partial_match() {
        let score = rouge_l("quick brown fox", "the quick brown fox");
        assert_eq!(score.precision, 1.0);
        assert_eq!(score.recall, 0.75);
        assert!(close_enough(score.f_measure, 0.8571, 0.01)); // LCS = 3, prec = 1.0, recall = 0.75 → F1 ≈ 0.857
    }

    #[test]
    fn test_rouge1_multiset_cap() {
        let score = rouge1("a a a", "a a");
        assert!(close_enough(score.precision, 2.0 / 3.0, 1e-9));
        assert_eq!(score.recall, 1.0);
    }

    #[test]
    fn test_rouge2_single_word_side() {
        // One word has no bigrams, so that side counts as empty
        assert!(all_zero(rouge2("hello", "hello world")));
        assert!(all_zero(rouge2("hello world", "hello")));
    }

    #[test]
    fn test_identity_scores_one() {
        let text = "the cat sat on the mat";
        for score in [rouge1(text, text), rouge2(text, text), rouge_l(text, text)] {
            assert_eq!(score, RougeScore::from((1.0, 1.0, 1.0)));
        }
    }

    #[test]
    fn test_disjoint_scores_zero() {
        let (pred, gold) = ("cats eat cheese", "dogs chase balls");
        assert!(all_zero(rouge1(pred, gold)));
        assert!(all_zero(rouge2(pred, gold)));
        assert!(all_zero(rouge_l(pred, gold)));
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        for (pred, gold) in [("", "the cat sat"), ("the cat sat", ""), ("", ""), ("  ", "\t")] {
            assert!(all_zero(rouge1(pred, gold)));
            assert!(all_zero(rouge2(pred, gold)));
            assert!(all_zero(rouge_l(pred, gold)));
        }
    }

    #[test]
    fn test_rouge_calculation_zero_counts() {
        assert!(all_zero(rouge_calculation(0, 0, 0)));
        assert!(all_zero(rouge_calculation(0, 5, 0)));
        assert!(all_zero(rouge_calculation(0, 0, 5)));
        let score = rouge_calculation(2, 4, 0);
        assert_eq!(score.precision, 0.5);
        assert_eq!(score.recall, 0.0);
        assert_eq!(score.f_measure, 0.0);
    }

    #[test]
    fn test_f_measure_harmonic_mean() {
        assert!(close_enough(f_measure_calculation(1.0, 0.5), 2.0 / 3.0, 1e-12));
        assert_eq!(f_measure_calculation(0.0, 1.0), 0.0);
        assert_eq!(f_measure_calculation(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_tuple_conversion() {
        let tuple: (f64, f64, f64) = rouge1("a b", "a c").into();
        assert_eq!(tuple, (0.5, 0.5, 0.5));
    }

    #[test]
    fn test_no_case_normalization() {
        assert!(all_zero(rouge1("The Cat", "the cat")));
    }

    proptest! {
        #[test]
        fn prop_scores_in_unit_interval(
            pred in proptest::collection::vec("[a-e]{1,2}", 1..15),
            gold in proptest::collection::vec("[a-e]{1,2}", 1..15),
        ) {
            let pred = pred.join(" ");
            let gold = gold.join(" ");
            for score in [rouge1(&pred, &gold), rouge2(&pred, &gold), rouge_l(&pred, &gold)] {
                for value in [score.precision, score.recall, score.f_measure] {
                    prop_assert!(value.is_finite());
                    prop_assert!((0.0..=1.0).contains(&value));
                }
            }
        }

        #[test]
        fn prop_rouge_l_never_exceeds_rouge1(
            pred in proptest::collection::vec("[a-e]", 1..15),
            gold in proptest::collection::vec("[a-e]", 1..15),
        ) {
            let pred = pred.join(" ");
            let gold = gold.join(" ");
            prop_assert!(rouge_l(&pred, &gold).recall <= rouge1(&pred, &gold).recall);
        }
    }
}
