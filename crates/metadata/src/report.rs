use std::fmt;

use codicon_mapping::Mapping;

use crate::{Coverage, Issue, MetadataFile, collect_primary_aliases, compute_coverage};

const RULE_WIDTH: usize = 60;

/// A metadata record with at least one structural issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    pub name: String,
    pub issues: Vec<Issue>,
}

/// Every finding of a metadata check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataReport {
    pub coverage: Coverage,
    pub invalid: Vec<InvalidEntry>,
}

impl MetadataReport {
    pub fn build(mapping: &Mapping, metadata: &MetadataFile) -> Self {
        let universe = collect_primary_aliases(mapping);
        Self {
            coverage: compute_coverage(&universe, metadata),
            invalid: metadata.invalid_entries(),
        }
    }

    /// No missing, orphaned, or malformed entries.
    pub fn is_clean(&self) -> bool {
        self.coverage.is_complete() && self.invalid.is_empty()
    }

    pub fn defect_count(&self) -> usize {
        self.coverage.missing.len() + self.coverage.orphaned.len() + self.invalid.len()
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, heading: &str, names: &[String]) -> fmt::Result {
    writeln!(f, "{heading} ({}):", names.len())?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
    for name in names {
        writeln!(f, "  - {name}")?;
    }
    writeln!(f)
}

impl fmt::Display for MetadataReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "Icon Metadata Coverage Report")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;

        let coverage = &self.coverage;
        writeln!(f, "Total icons: {}", coverage.total)?;
        writeln!(f, "Icons with metadata: {}", coverage.covered())?;
        writeln!(f, "Coverage: {}%", coverage.percent)?;
        writeln!(f)?;

        if !coverage.missing.is_empty() {
            write_names(f, "Icons missing metadata", &coverage.missing)?;
        }
        if !coverage.orphaned.is_empty() {
            write_names(f, "Metadata entries for non-existent icons", &coverage.orphaned)?;
        }
        if coverage.is_complete() {
            writeln!(f, "✓ All icons have metadata and no orphaned entries found!")?;
            writeln!(f)?;
        }

        if !self.invalid.is_empty() {
            writeln!(f, "Metadata entries with validation issues ({}):", self.invalid.len())?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            for entry in &self.invalid {
                writeln!(f, "  - {}:", entry.name)?;
                for issue in &entry.issues {
                    writeln!(f, "      * {issue}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report() {
        let mapping = Mapping::from_json(r#"{"100": ["foo", "bar"]}"#).unwrap();
        let metadata = MetadataFile::from_json(
            r#"{"foo": {"tags": ["x"], "category": "c", "description": "d"}}"#,
        )
        .unwrap();

        let report = MetadataReport::build(&mapping, &metadata);
        assert!(report.is_clean());
        assert_eq!(report.defect_count(), 0);

        let text = report.to_string();
        assert!(text.contains("Coverage: 100%"));
        assert!(text.contains("✓ All icons have metadata"));
    }

    #[test]
    fn test_report_lists_every_finding() {
        let mapping = Mapping::from_json(r#"{"100": ["foo"], "101": ["bar"]}"#).unwrap();
        let metadata = MetadataFile::from_json(
            r#"{"foo": {"tags": [], "category": "c"}, "ghost": {"tags": ["x"], "category": "c", "description": "d"}}"#,
        )
        .unwrap();

        let report = MetadataReport::build(&mapping, &metadata);
        assert!(!report.is_clean());
        assert_eq!(report.coverage.missing, vec!["bar"]);
        assert_eq!(report.coverage.orphaned, vec!["ghost"]);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].issues, vec![Issue::EmptyTags, Issue::InvalidDescription]);
        assert_eq!(report.defect_count(), 3);

        let text = report.to_string();
        assert!(text.contains("Icons missing metadata (1):"));
        assert!(text.contains("  - bar"));
        assert!(text.contains("Metadata entries for non-existent icons (1):"));
        assert!(text.contains("      * empty tags array"));
        assert!(!text.contains("✓"));
    }
}
