//! Consistency checks over the project configuration and compiled font.

use std::path::Path;

use codicon_metadata::MetadataReport;

use crate::{
    ProjectPaths, Result,
    glyphs::{FontCheck, verify_font},
    io::read_font,
    paths::require,
};

/// Metadata coverage and record validation for the whole project.
pub fn check_metadata(paths: &ProjectPaths) -> Result<MetadataReport> {
    require("mapping.json", &paths.mapping)?;
    require("metadata.json", &paths.metadata)?;

    let mapping = paths.load_mapping()?;
    let metadata = paths.load_metadata()?;
    Ok(MetadataReport::build(&mapping, &metadata))
}

/// Compare the mapping against the cmap of a compiled font.
pub fn check_font(paths: &ProjectPaths, font: &Path) -> Result<FontCheck> {
    require("Font file", font)?;
    let mapping = paths.load_mapping()?;
    let data = read_font(font)?;
    verify_font(&mapping, &data)
}
