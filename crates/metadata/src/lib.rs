//! Icon metadata coverage checks.
//!
//! Cross-references the primary aliases of a [`Mapping`] with the entries of
//! `metadata.json` and validates the shape of every record. Findings are
//! aggregated into a [`MetadataReport`]; nothing here stops at the first
//! defect.

mod coverage;
mod record;
mod report;

use std::result;

use indexmap::IndexMap;
use serde_json::Value;

pub use coverage::{Coverage, collect_primary_aliases, compute_coverage};
pub use record::{Issue, validate_record};
pub use report::{InvalidEntry, MetadataReport};

/// Errors raised while loading metadata.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse metadata: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;

/// Contents of `metadata.json`, keyed by primary alias.
///
/// Records are kept as raw JSON so malformed entries can be reported instead
/// of rejected at load time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataFile {
    records: IndexMap<String, Value>,
}

impl MetadataFile {
    pub fn new(records: IndexMap<String, Value>) -> Self {
        Self { records }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self { records: serde_json::from_str(text)? })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Validate every record, returning only those with issues.
    pub fn invalid_entries(&self) -> Vec<InvalidEntry> {
        self.iter()
            .filter_map(|(name, record)| {
                let issues = validate_record(record);
                (!issues.is_empty()).then(|| InvalidEntry { name: name.to_string(), issues })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keeps_malformed_records() {
        let file = MetadataFile::from_json(
            r#"{"add": {"tags": ["plus"], "category": "action", "description": "Add"}, "bad": 3}"#,
        )
        .unwrap();
        assert_eq!(file.len(), 2);
        assert!(file.contains("bad"));

        let invalid = file.invalid_entries();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].name, "bad");
        assert_eq!(invalid[0].issues.len(), 3);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(MetadataFile::from_json("[]").is_err());
    }
}
