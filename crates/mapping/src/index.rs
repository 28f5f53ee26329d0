use indexmap::IndexMap;
use log::warn;
use serde::Serialize;

use crate::{Error, Mapping, Result};

/// How duplicate aliases are handled while building an [`AliasIndex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AliasMode {
    /// Reject an alias registered under two codepoints.
    #[default]
    Strict,
    /// Keep the codepoint seen last and log the overwrite.
    Lenient,
}

/// Alias → codepoint view of a [`Mapping`].
///
/// Serializes as a flat `{alias: codepoint}` object, which is the shape the
/// font generator expects for its `codepoints` option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasIndex {
    codes: IndexMap<String, u32>,
}

impl AliasIndex {
    pub fn build(mapping: &Mapping, mode: AliasMode) -> Result<Self> {
        let mut codes = IndexMap::with_capacity(mapping.alias_count());

        for (code, aliases) in mapping.iter() {
            for alias in aliases {
                let Some(previous) = codes.insert(alias.clone(), code) else {
                    continue;
                };
                if previous == code {
                    continue;
                }
                match mode {
                    AliasMode::Strict => {
                        return Err(Error::DuplicateAlias {
                            alias: alias.clone(),
                            first: previous,
                            second: code,
                        });
                    }
                    AliasMode::Lenient => {
                        warn!("alias '{alias}' moved from {previous} to {code}");
                    }
                }
            }
        }

        Ok(Self { codes })
    }

    pub fn get(&self, alias: &str) -> Option<u32> {
        self.codes.get(alias).copied()
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.codes.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.codes.iter().map(|(alias, code)| (alias.as_str(), *code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(json: &str) -> Mapping {
        Mapping::from_json(json).unwrap()
    }

    #[test]
    fn test_index_size_matches_alias_count() {
        let m = mapping(r#"{"100": ["foo", "bar"], "101": ["baz"], "102": []}"#);
        let index = m.index(AliasMode::Strict).unwrap();
        assert_eq!(index.len(), m.alias_count());
        assert_eq!(index.get("foo"), Some(100));
        assert_eq!(index.get("bar"), Some(100));
        assert_eq!(index.get("baz"), Some(101));
        assert_eq!(index.get("qux"), None);
    }

    #[test]
    fn test_strict_rejects_duplicate() {
        let m = mapping(r#"{"100": ["foo"], "101": ["foo"]}"#);
        let err = m.index(AliasMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateAlias { ref alias, first: 100, second: 101 } if alias == "foo"
        ));
    }

    #[test]
    fn test_lenient_last_write_wins() {
        let m = mapping(r#"{"100": ["foo", "bar"], "101": ["foo"]}"#);
        let index = m.index(AliasMode::Lenient).unwrap();
        assert_eq!(index.get("foo"), Some(101));
        assert_eq!(index.len(), 2);
        assert_eq!(m.names_sharing_codepoint("foo", &index), vec!["foo"]);
    }

    #[test]
    fn test_repeat_within_one_codepoint_is_not_a_duplicate() {
        let m = mapping(r#"{"100": ["foo", "foo"]}"#);
        assert!(m.index(AliasMode::Strict).is_ok());
    }

    #[test]
    fn test_serializes_flat() {
        let m = mapping(r#"{"100": ["foo", "bar"], "101": ["baz"]}"#);
        let index = m.index(AliasMode::Strict).unwrap();
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"foo":100,"bar":100,"baz":101}"#);
    }
}
