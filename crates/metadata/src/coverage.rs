use std::collections::BTreeSet;

use codicon_mapping::Mapping;

use crate::MetadataFile;

/// Metadata coverage of a set of icons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Number of icons in the universe.
    pub total: usize,
    /// Icons without a metadata record, sorted.
    pub missing: Vec<String>,
    /// Metadata records for icons outside the universe, sorted.
    pub orphaned: Vec<String>,
    /// Rounded share of icons with metadata, 0 for an empty universe.
    pub percent: u8,
}

impl Coverage {
    pub fn covered(&self) -> usize {
        self.total - self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty()
    }
}

/// Primary aliases of every codepoint; the icons that need metadata.
pub fn collect_primary_aliases(mapping: &Mapping) -> BTreeSet<String> {
    mapping.primary_aliases().map(|(_, alias)| alias.to_string()).collect()
}

pub fn compute_coverage(universe: &BTreeSet<String>, metadata: &MetadataFile) -> Coverage {
    let missing: Vec<String> =
        universe.iter().filter(|name| !metadata.contains(name)).cloned().collect();

    let mut orphaned: Vec<String> = metadata
        .names()
        .filter(|name| !universe.contains(*name))
        .map(str::to_string)
        .collect();
    orphaned.sort();
    orphaned.dedup();

    let total = universe.len();
    let covered = total - missing.len();

    Coverage { total, missing, orphaned, percent: rounded_percent(covered, total) }
}

/// `round(100 * part / whole)` with halves rounded up; 0 when `whole` is 0.
fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let scaled = (200 * part as u128 + whole as u128) / (2 * whole as u128);
    scaled.min(100) as u8
}
