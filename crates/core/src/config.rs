//! Configuration constants for codicon builds.

/// Font family name and output file stem.
pub const FONT_NAME: &str = "codicon";

/// CSS class prefix.
pub const FONT_PREFIX: &str = "codicon";

/// Font formats requested from the generator.
pub const FONT_TYPES: &[&str] = &["ttf"];

/// Extra assets requested from the generator.
pub const ASSET_TYPES: &[&str] = &["css", "html"];

/// Whether the generator normalizes glyph sizes.
pub const NORMALIZE: bool = true;

/// Icon SVG directory, relative to the project root.
pub const ICONS_DIR: &str = "src/icons";

/// Codepoint → aliases mapping file.
pub const MAPPING_FILE: &str = "src/template/mapping.json";

/// Per-icon metadata file.
pub const METADATA_FILE: &str = "src/template/metadata.json";

/// HTML preview template.
pub const HTML_TEMPLATE: &str = "src/template/preview.hbs";

/// CSS template.
pub const CSS_TEMPLATE: &str = "src/template/styles.hbs";

/// Package descriptor holding `version` and `fontVersion`.
pub const PACKAGE_FILE: &str = "package.json";

/// Build output directory.
pub const DIST_DIR: &str = "dist";

/// Default sprite file name inside the output directory.
pub const SPRITE_FILE: &str = "codicon.svg";

/// Flat copy of the icons used when staging is enabled.
pub const STAGING_DIR: &str = "temp_svg_icons";

/// Generator config written next to the outputs.
pub const GENERATOR_CONFIG_FILE: &str = ".fantasticonrc.json";

/// Default font generator command.
pub const GENERATOR_COMMAND: &[&str] = &["npx", "fantasticon"];

/// Marker line for embedded metadata in the HTML preview.
pub const METADATA_PLACEHOLDER: &str = "// METADATA_PLACEHOLDER";

/// Marker line for embedded SVG sources in the HTML preview.
pub const SVG_DATA_PLACEHOLDER: &str = "// SVG_DATA_PLACEHOLDER";

/// Private use area scanned for codepoints the mapping doesn't know about.
pub const PRIVATE_USE_AREA: std::ops::RangeInclusive<u32> = 0xE000..=0xF8FF;
