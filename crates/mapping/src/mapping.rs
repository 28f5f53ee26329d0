use indexmap::IndexMap;

use crate::{AliasIndex, AliasMode, Error, Result};

/// Ordered codepoint → alias list table.
///
/// Iteration follows the order of the source file. The first alias of each
/// codepoint is its primary name, which is also the SVG file stem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: IndexMap<u32, Vec<String>>,
}

impl Mapping {
    pub fn new(entries: IndexMap<u32, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Parse `mapping.json`: an object with decimal codepoint keys.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: IndexMap<String, Vec<String>> = serde_json::from_str(text)?;
        Self::from_entries(raw)
    }

    /// Build a mapping from string-keyed entries, validating every key.
    pub fn from_entries(raw: impl IntoIterator<Item = (String, Vec<String>)>) -> Result<Self> {
        let mut entries = IndexMap::new();
        for (key, aliases) in raw {
            let code = parse_codepoint(&key)?;
            if entries.insert(code, aliases).is_some() {
                return Err(Error::DuplicateCodepoint(code));
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of aliases across all codepoints.
    pub fn alias_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.entries.iter().map(|(code, aliases)| (*code, aliases.as_slice()))
    }

    pub fn codepoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    pub fn aliases(&self, code: u32) -> Option<&[String]> {
        self.entries.get(&code).map(Vec::as_slice)
    }

    /// First alias registered for `code`.
    pub fn primary_alias(&self, code: u32) -> Result<&str> {
        let aliases = self.entries.get(&code).ok_or(Error::UnknownCodepoint(code))?;
        aliases.first().map(String::as_str).ok_or(Error::MalformedMapping(code))
    }

    /// Primary aliases in mapping order. Codepoints with no aliases are skipped.
    pub fn primary_aliases(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries
            .iter()
            .filter_map(|(code, aliases)| aliases.first().map(|a| (*code, a.as_str())))
    }

    /// Derive the alias → codepoint index.
    pub fn index(&self, mode: AliasMode) -> Result<AliasIndex> {
        AliasIndex::build(self, mode)
    }

    /// All aliases sharing a glyph with `alias`, in mapping order.
    ///
    /// The result always contains `alias`. An alias missing from the index
    /// resolves to itself alone.
    pub fn names_sharing_codepoint<'a>(&'a self, alias: &'a str, index: &AliasIndex) -> Vec<&'a str> {
        match index.get(alias).and_then(|code| self.entries.get(&code)) {
            Some(aliases) => aliases.iter().map(String::as_str).collect(),
            None => vec![alias],
        }
    }
}

fn parse_codepoint(key: &str) -> Result<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidCodepoint(key.to_string()));
    }
    match key.parse::<u32>() {
        Ok(code) if code > 0 => Ok(code),
        _ => Err(Error::InvalidCodepoint(key.to_string())),
    }
}
