//! Dataset loading, score persistence and run configuration.
//!
//! A dataset is a JSON array of `{"reference": str, "candidate": [str]}`
//! entries. Scores are written as a JSON array of [`ScoreRecord`]s.
//!
//! [`ScoreRecord`]: crate::score::ScoreRecord

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{json_kind, DatasetError};

/// Environment variable that switches score output to compact JSON.
pub const COMPACT_ENV: &str = "ROUGE_EVAL_COMPACT";

/// Where the evaluator reads its dataset and writes its scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub data_dir: PathBuf,
    pub dataset_file: String,
    pub scores_file: String,
    /// Pretty-print scores with 2-space indentation.
    pub indent: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            data_dir: PathBuf::from("data"),
            dataset_file: "dataset.json".to_string(),
            scores_file: "scores.json".to_string(),
            indent: true,
        }
    }
}

impl EvalConfig {
    /// Defaults, with the data directory taken from the first argument (if
    /// any) and indentation turned off when [`COMPACT_ENV`] is `1`/`true`.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = EvalConfig::default();
        if let Some(dir) = args.into_iter().next() {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(flag) = std::env::var(COMPACT_ENV) {
            config.indent = !matches!(flag.trim(), "1" | "true");
        }
        config
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.dataset_file)
    }

    pub fn scores_path(&self) -> PathBuf {
        self.data_dir.join(&self.scores_file)
    }
}

pub fn create_data_directory(config: &EvalConfig) -> Result<(), DatasetError> {
    if !config.data_dir.exists() {
        info!("Creating data directory {}", config.data_dir.display());
        fs::create_dir_all(&config.data_dir)?;
    }
    Ok(())
}

pub fn check_dataset_file(config: &EvalConfig) -> Result<(), DatasetError> {
    let path = config.dataset_path();
    if !path.is_file() {
        return Err(DatasetError::DatasetNotFound(path));
    }
    Ok(())
}

pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, DatasetError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serializes `data`, pretty-printed with 2-space indentation when `indent`.
pub fn to_json<T: Serialize + ?Sized>(data: &T, indent: bool) -> Result<String, DatasetError> {
    let json = if indent {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    Ok(json)
}

pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(
    path: P,
    data: &T,
    indent: bool,
) -> Result<(), DatasetError> {
    fs::write(path, to_json(data, indent)?)?;
    Ok(())
}

/// Reads the dataset as raw entries; each entry is validated when its pairs
/// are expanded.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<Value>, DatasetError> {
    match read_json::<Value, _>(path)? {
        Value::Array(entries) => Ok(entries),
        other => Err(DatasetError::NotAnArray(json_kind(&other).to_string())),
    }
}

/// Follows `keys` through nested objects. No keys returns `data` itself.
pub fn get_from_nested_key<'a>(data: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(data, |value, key| value.get(*key))
}

/// Like [`get_from_nested_key`], but names the first missing key.
pub fn get_from_nested_key_strict<'a>(
    data: &'a Value,
    keys: &[&str],
) -> Result<&'a Value, DatasetError> {
    keys.iter().try_fold(data, |value, key| {
        value
            .get(*key)
            .ok_or_else(|| DatasetError::MissingKey(key.to_string()))
    })
}
