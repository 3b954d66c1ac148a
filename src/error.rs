//! Error types for pair scoring and dataset I/O.

use std::path::PathBuf;

/// Why a single candidate/reference pair could not be scored.
///
/// These never abort a batch; the driver logs them and moves on.
#[derive(thiserror::Error, Debug)]
pub enum ScoreError {
    /// A field that must hold text held some other JSON value.
    #[error("expected `{field}` to be a string, found {found}")]
    TypeMismatch { field: &'static str, found: String },
    /// A dataset entry lacks a required field.
    #[error("dataset entry is missing `{0}`")]
    MissingField(&'static str),
    /// The worker scoring this pair panicked or was cancelled.
    #[error("scoring task failed: {0}")]
    TaskFailed(String),
}

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("dataset file ({}) not found", .0.display())]
    DatasetNotFound(PathBuf),
    #[error("key '{0}' not found in data")]
    MissingKey(String),
    #[error("expected a JSON array of dataset entries, found {0}")]
    NotAnArray(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Short name of a JSON value's kind, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
