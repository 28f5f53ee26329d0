use std::fmt;

use serde_json::Value;

/// A structural defect in one metadata record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    /// `tags` is absent, not an array, or holds non-string entries.
    InvalidTags,
    /// `tags` is an empty array.
    EmptyTags,
    /// `category` is absent, empty, or not a string.
    InvalidCategory,
    /// `description` is absent, empty, or not a string.
    InvalidDescription,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Issue::InvalidTags => "missing or invalid tags array",
            Issue::EmptyTags => "empty tags array",
            Issue::InvalidCategory => "missing or invalid category",
            Issue::InvalidDescription => "missing or invalid description",
        })
    }
}

/// Check the shape of one record. Every check runs; each failure adds one issue.
pub fn validate_record(record: &Value) -> Vec<Issue> {
    let mut issues = Vec::new();

    match record.get("tags").and_then(Value::as_array) {
        Some(tags) if tags.is_empty() => issues.push(Issue::EmptyTags),
        Some(tags) if tags.iter().all(Value::is_string) => {}
        _ => issues.push(Issue::InvalidTags),
    }

    if !is_non_empty_string(record.get("category")) {
        issues.push(Issue::InvalidCategory);
    }

    if !is_non_empty_string(record.get("description")) {
        issues.push(Issue::InvalidDescription);
    }

    issues
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    value.and_then(Value::as_str).is_some_and(|s| !s.is_empty())
}
