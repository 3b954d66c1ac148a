use crate::error::{json_kind, ScoreError};
use crate::rouge::{rouge1_seq, rouge2_seq, rouge_l_seq, RougeScore};
use crate::utils::Sequence;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::runtime::Runtime;

/// All three ROUGE variants for one candidate/reference pair, in the shape
/// written to `scores.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub candidate: String,
    pub reference: String,
    #[serde(rename = "ROUGE-1")]
    pub rouge_1: RougeScore,
    #[serde(rename = "ROUGE-2")]
    pub rouge_2: RougeScore,
    #[serde(rename = "ROUGE-L")]
    pub rouge_l: RougeScore,
}

impl ScoreRecord {
    pub fn new(candidate: &str, reference: &str) -> Self {
        PerformanceContext::from_str(candidate, reference).into_record()
    }
}

/// A tokenized pair, so every metric reuses the same word vectors.
pub struct PerformanceContext {
    pred: Sequence,
    gold: Sequence,
}

impl PerformanceContext {
    pub fn new(pred: Sequence, gold: Sequence) -> Self {
        PerformanceContext { pred, gold }
    }

    pub fn from_str(pred: &str, gold: &str) -> Self {
        PerformanceContext {
            pred: Sequence::new(pred),
            gold: Sequence::new(gold),
        }
    }

    pub fn rouge1(&self) -> RougeScore {
        rouge1_seq(&self.pred, &self.gold)
    }

    pub fn rouge2(&self) -> RougeScore {
        rouge2_seq(&self.pred, &self.gold)
    }

    pub fn rouge_l(&self) -> RougeScore {
        rouge_l_seq(&self.pred, &self.gold)
    }

    pub fn into_record(self) -> ScoreRecord {
        let (rouge_1, rouge_2, rouge_l) = (self.rouge1(), self.rouge2(), self.rouge_l());
        ScoreRecord {
            candidate: self.pred.text,
            reference: self.gold.text,
            rouge_1,
            rouge_2,
            rouge_l,
        }
    }
}

/// One pair as read from a dataset. Fields stay as raw JSON until scoring,
/// so a malformed value only fails its own pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairInput {
    pub candidate: Value,
    pub reference: Value,
}

impl PairInput {
    pub fn from_text(candidate: impl Into<String>, reference: impl Into<String>) -> Self {
        PairInput {
            candidate: Value::String(candidate.into()),
            reference: Value::String(reference.into()),
        }
    }
}

fn expect_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, ScoreError> {
    value.as_str().ok_or_else(|| ScoreError::TypeMismatch {
        field,
        found: json_kind(value).to_string(),
    })
}

/// Scores a pair after checking both sides are strings. Nothing is coerced.
pub fn score_pair(candidate: &Value, reference: &Value) -> Result<ScoreRecord, ScoreError> {
    let candidate = expect_str(candidate, "candidate")?;
    let reference = expect_str(reference, "reference")?;
    Ok(ScoreRecord::new(candidate, reference))
}

#[derive(Debug, Default)]
pub struct ExpandedPairs {
    pub pairs: Vec<PairInput>,
    pub skipped_entries: usize,
}

fn entry_pairs(entry: &Value) -> Result<Vec<PairInput>, ScoreError> {
    let reference = entry
        .get("reference")
        .ok_or(ScoreError::MissingField("reference"))?;
    let candidates = entry
        .get("candidate")
        .ok_or(ScoreError::MissingField("candidate"))?;
    let candidates = candidates
        .as_array()
        .ok_or_else(|| ScoreError::TypeMismatch {
            field: "candidate",
            found: json_kind(candidates).to_string(),
        })?;
    Ok(candidates
        .iter()
        .map(|candidate| PairInput {
            candidate: candidate.clone(),
            reference: reference.clone(),
        })
        .collect())
}

/// Flattens `{reference, candidate: [..]}` entries into pairs, in file order.
/// Entries that can't be expanded are logged and skipped.
pub fn expand_pairs(entries: &[Value]) -> ExpandedPairs {
    let mut expanded = ExpandedPairs::default();
    for (idx, entry) in entries.iter().enumerate() {
        match entry_pairs(entry) {
            Ok(pairs) => expanded.pairs.extend(pairs),
            Err(e) => {
                warn!("Error processing dataset entry #{idx}: {e}");
                expanded.skipped_entries += 1;
            }
        }
    }
    expanded
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<ScoreRecord>,
    pub failures: usize,
}

/// Scores every pair on the blocking pool and collects records in input
/// order. A failed pair is logged and counted; the rest still complete.
pub async fn get_results_from_batch(pairs: Vec<PairInput>) -> BatchOutcome {
    let tasks = pairs.into_iter().enumerate().map(|(idx, pair)| async move {
        let candidate_preview = pair.candidate.to_string();
        let result = tokio::task::spawn_blocking(move || {
            score_pair(&pair.candidate, &pair.reference)
        })
        .await
        .unwrap_or_else(|e| Err(ScoreError::TaskFailed(e.to_string())));
        (idx, candidate_preview, result)
    });

    let mut outcome = BatchOutcome::default();
    for (idx, candidate, result) in futures::future::join_all(tasks).await {
        match result {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                warn!("Error processing candidate #{idx} {candidate}: {e}");
                outcome.failures += 1;
            }
        }
    }
    debug!(
        "scored {} pairs, {} failed",
        outcome.records.len(),
        outcome.failures
    );
    outcome
}

/// Runs [`get_results_from_batch`] on a fresh multi-threaded runtime.
pub fn score_batch_blocking(pairs: Vec<PairInput>) -> std::io::Result<BatchOutcome> {
    let rt = Runtime::new()?;
    Ok(rt.block_on(get_results_from_batch(pairs)))
}
