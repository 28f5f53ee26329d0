//! Embedding metadata and SVG sources into the generated HTML preview.
//!
//! The preview template initialises two script variables on marker lines:
//!
//! ```text
//! let metadata = {}; // METADATA_PLACEHOLDER
//! let svgData = {}; // SVG_DATA_PLACEHOLDER
//! ```
//!
//! Each marker line is rewritten in place with the actual data.

use std::{collections::BTreeMap, path::Path, sync::OnceLock};

use log::warn;
use regex::{NoExpand, Regex};

use crate::{
    AssetStore, Error, Result,
    config::{METADATA_PLACEHOLDER, SVG_DATA_PLACEHOLDER},
    io::{collect_svgs, read_text, transform_text_in_place},
    paths::require,
};

fn metadata_line() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r"let metadata = .* // METADATA_PLACEHOLDER").unwrap())
}

fn svg_data_line() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r"let svgData = .* // SVG_DATA_PLACEHOLDER").unwrap())
}

fn replace_marker(html: &str, marker: &str, line: &Regex, replacement: &str) -> Option<String> {
    if !html.contains(marker) || !line.is_match(html) {
        return None;
    }
    Some(line.replace(html, NoExpand(replacement)).into_owned())
}

/// Replace the metadata marker line. `None` if the marker is absent.
pub fn embed_metadata(html: &str, metadata_json: &str) -> Option<String> {
    let replacement = format!("let metadata = {metadata_json}; {METADATA_PLACEHOLDER}");
    replace_marker(html, METADATA_PLACEHOLDER, metadata_line(), &replacement)
}

/// Replace the SVG data marker line with a `{name: svg}` object.
pub fn embed_svg_data(html: &str, svgs: &BTreeMap<String, String>) -> Result<Option<String>> {
    let data = serde_json::to_string(svgs).map_err(|e| Error::json("svgData", e))?;
    let replacement = format!("let svgData = {data}; {SVG_DATA_PLACEHOLDER}");
    Ok(replace_marker(html, SVG_DATA_PLACEHOLDER, svg_data_line(), &replacement))
}

/// Embed `metadata.json` into the preview file. Returns whether it changed.
pub fn embed_metadata_file(html_path: &Path, metadata_path: &Path) -> Result<bool> {
    require("HTML file", html_path)?;
    require("metadata.json", metadata_path)?;
    let metadata: serde_json::Value = serde_json::from_str(&read_text(metadata_path)?)
        .map_err(|e| Error::json(metadata_path, e))?;
    // Single line, so the marker regex still matches on the next run.
    let metadata = metadata.to_string();

    let changed = transform_text_in_place(html_path, |html| Ok(embed_metadata(html, &metadata)))?;
    if changed {
        println!("  Metadata embedded into HTML.");
    } else {
        warn!("Metadata placeholder not found in {}", html_path.display());
    }
    Ok(changed)
}

/// Embed every icon SVG into the preview file. Returns the number embedded.
pub fn embed_svg_data_file(html_path: &Path, store: &impl AssetStore) -> Result<Option<usize>> {
    require("HTML file", html_path)?;
    let svgs = collect_svgs(store)?;

    let changed = transform_text_in_place(html_path, |html| embed_svg_data(html, &svgs))?;
    if changed {
        println!("  SVG data embedded into HTML ({} icons).", svgs.len());
        Ok(Some(svgs.len()))
    } else {
        warn!("SVG data placeholder not found in {}", html_path.display());
        Ok(None)
    }
}
