//! Emoji dataset
//!
//! Loads the reshaped emoji document: a JSON array of
//! `[symbol, name, [descriptions...]]` rows.

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// One labeled dataset row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub symbol: String,
    pub name: String,
    pub descriptions: Vec<String>,
}

impl Entry {
    pub fn new<I, S>(symbol: &str, name: &str, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            descriptions: descriptions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Dataset must be a JSON array of rows, found {0}")]
    NotAnArray(&'static str),
}

/// Read-only collection of entries, in document order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<Entry>,
    skipped: usize,
}

impl Dataset {
    /// Load a dataset from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&text)?;
        info!(
            "Loaded {} entries from {} ({} skipped)",
            dataset.len(),
            path.display(),
            dataset.skipped
        );
        Ok(dataset)
    }

    /// Parse a dataset document.
    ///
    /// Malformed rows are skipped and counted rather than failing the load.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let document: Value = serde_json::from_str(text)?;
        let rows = match document {
            Value::Array(rows) => rows,
            other => return Err(DatasetError::NotAnArray(json_kind(&other))),
        };

        let mut entries = Vec::with_capacity(rows.len());
        let mut skipped = 0;

        for (index, row) in rows.iter().enumerate() {
            match parse_row(row) {
                Some(entry) => entries.push(entry),
                None => {
                    warn!("Skipping malformed dataset row {}: {}", index, row);
                    skipped += 1;
                }
            }
        }

        debug!("Parsed {} dataset rows", rows.len());
        Ok(Self { entries, skipped })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows dropped while parsing
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// First entry whose symbol is exactly `symbol`
    pub fn find_symbol(&self, symbol: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.symbol == symbol)
    }
}

impl FromIterator<Entry> for Dataset {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            skipped: 0,
        }
    }
}

/// A row is `[string, string, array]`; non-string descriptions are dropped
fn parse_row(row: &Value) -> Option<Entry> {
    let fields = row.as_array()?;
    if fields.len() != 3 {
        return None;
    }

    let symbol = fields[0].as_str()?;
    let name = fields[1].as_str()?;
    let descriptions = fields[2]
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect::<Vec<_>>();

    Some(Entry {
        symbol: symbol.to_string(),
        name: name.to_string(),
        descriptions,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        ["🎉", "party_popper", ["celebration", "confetti", "tada"]],
        ["😂", "face_with_tears_of_joy", ["laugh", "lol"]],
        ["❤️", "red_heart", ["love"]]
    ]"#;

    #[test]
    fn test_parse_rows() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.skipped(), 0);

        let first = &dataset.entries()[0];
        assert_eq!(first.symbol, "🎉");
        assert_eq!(first.name, "party_popper");
        assert_eq!(first.descriptions, vec!["celebration", "confetti", "tada"]);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let text = r#"[
            ["🎉", "party_popper", ["tada"]],
            ["😂", null, ["laugh"]],
            ["❤️", "red_heart"],
            "not a row",
            ["🔥", "fire", ["hot", 42, "lit"]]
        ]"#;
        let dataset = Dataset::from_json_str(text).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.skipped(), 3);
        assert_eq!(dataset.entries()[1].descriptions, vec!["hot", "lit"]);
    }

    #[test]
    fn test_not_an_array() {
        let err = Dataset::from_json_str(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray("an object")));
        assert_eq!(
            err.to_string(),
            "Dataset must be a JSON array of rows, found an object"
        );

        let err = Dataset::from_json_str("[oops").unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_find_symbol() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.find_symbol("😂").map(|e| e.name.as_str()), Some("face_with_tears_of_joy"));
        assert!(dataset.find_symbol("🐍").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_from_iterator() {
        let dataset: Dataset = vec![Entry::new("🎉", "party popper", ["celebration"])]
            .into_iter()
            .collect();
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());
    }
}
