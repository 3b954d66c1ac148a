//! ROUGE-1, ROUGE-2 and ROUGE-L scoring of candidate texts against
//! references.
//!
//! Texts are split on whitespace with no further normalization, so callers
//! that want lowercasing or stemming must do it before scoring.

pub mod dataset;
pub mod error;
pub mod lcs;
pub mod overlap;
pub mod rouge;
pub mod score;
pub mod utils;

pub use error::{DatasetError, ScoreError};
pub use lcs::{lcs_length, longest_common_subsequence};
pub use rouge::{rouge1, rouge2, rouge_calculation, rouge_l, RougeScore};
pub use score::{get_results_from_batch, score_batch_blocking, PairInput, ScoreRecord};

#[cfg(feature = "python")]
mod python {
    use crate::score::{score_batch_blocking, PairInput};
    use crate::utils::str_to_word_vec;
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    type ScoreTuple = (f64, f64, f64);

    // Non-str arguments are rejected by PyO3 with a TypeError before any
    // of these bodies run.

    #[pyfunction]
    fn rouge1(candidate: &str, reference: &str) -> ScoreTuple {
        crate::rouge::rouge1(candidate, reference).into()
    }

    #[pyfunction]
    fn rouge2(candidate: &str, reference: &str) -> ScoreTuple {
        crate::rouge::rouge2(candidate, reference).into()
    }

    #[pyfunction]
    fn rouge_l(candidate: &str, reference: &str) -> ScoreTuple {
        crate::rouge::rouge_l(candidate, reference).into()
    }

    #[pyfunction]
    fn lcs(candidate: &str, reference: &str) -> Vec<String> {
        crate::lcs::longest_common_subsequence(
            &str_to_word_vec(candidate),
            &str_to_word_vec(reference),
        )
    }

    /// Returns `(rouge1, rouge2, rouge_l)` for each pair, in order.
    #[pyfunction]
    fn score_batch(
        py: Python,
        candidates: Vec<String>,
        references: Vec<String>,
    ) -> PyResult<Vec<(ScoreTuple, ScoreTuple, ScoreTuple)>> {
        if candidates.len() != references.len() {
            return Err(PyValueError::new_err(format!(
                "got {} candidates but {} references",
                candidates.len(),
                references.len()
            )));
        }
        let pairs: Vec<PairInput> = candidates
            .into_iter()
            .zip(references)
            .map(|(candidate, reference)| PairInput::from_text(candidate, reference))
            .collect();

        let outcome = py
            .allow_threads(|| score_batch_blocking(pairs))
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
        if outcome.failures > 0 {
            return Err(PyRuntimeError::new_err(format!(
                "{} pairs failed to score",
                outcome.failures
            )));
        }

        Ok(outcome
            .records
            .into_iter()
            .map(|r| (r.rouge_1.into(), r.rouge_2.into(), r.rouge_l.into()))
            .collect())
    }

    #[pymodule]
    fn rougescore(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(rouge1, m)?)?;
        m.add_function(wrap_pyfunction!(rouge2, m)?)?;
        m.add_function(wrap_pyfunction!(rouge_l, m)?)?;
        m.add_function(wrap_pyfunction!(lcs, m)?)?;
        m.add_function(wrap_pyfunction!(score_batch, m)?)?;
        Ok(())
    }
}
