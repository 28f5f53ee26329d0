//! Metadata and font consistency checks.

use std::path::Path;

use anyhow::{Result, bail};
use codicon_core::{
    ProjectPaths, check_font,
    glyphs::{export_glyphs, format_unicode, glyph_table},
    io::{read_font, write_text},
};

pub fn check_metadata(paths: &ProjectPaths) -> Result<()> {
    let report = codicon_core::check_metadata(paths)?;
    print!("{report}");
    if !report.is_clean() {
        bail!("metadata check failed with {} issue(s)", report.defect_count());
    }
    Ok(())
}

pub fn verify_font(paths: &ProjectPaths, font: &Path) -> Result<()> {
    let check = check_font(paths, font)?;

    for (codepoint, alias) in &check.missing {
        println!("  ✗ {alias} (U+{}) is not in the font", format_unicode(*codepoint));
    }
    if !check.unmapped.is_empty() {
        println!("  {} private-use glyph(s) have no mapping entry:", check.unmapped.len());
        for codepoint in &check.unmapped {
            println!("    U+{}", format_unicode(*codepoint));
        }
    }

    if !check.is_consistent() {
        bail!("{} mapped codepoint(s) missing from {}", check.missing.len(), font.display());
    }
    println!("✓ {} matches the mapping", font.display());
    Ok(())
}

pub fn export(font: &Path, output: Option<&Path>) -> Result<()> {
    let data = read_font(font)?;
    let rows = export_glyphs(&data)?;
    let table = glyph_table(&rows);

    match output {
        Some(path) => {
            write_text(path, &table)?;
            println!("Exported {} glyphs to {}", rows.len(), path.display());
        }
        None => println!("{table}"),
    }
    Ok(())
}
