//! Error types for the build pipeline.

use std::{io, path::PathBuf, result};

/// Result type for pipeline operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while building or checking the icon font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input file or directory does not exist.
    #[error("{what} not found at: {path}")]
    ConfigNotFound { what: &'static str, path: PathBuf },

    /// The icons directory holds no SVG files.
    #[error("No SVG files found in {0}")]
    NoIcons(PathBuf),

    /// Failed to read or write a file.
    #[error("I/O error on '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    /// Failed to parse or serialize JSON.
    #[error("Invalid JSON in '{path}': {source}")]
    Json { path: PathBuf, source: serde_json::Error },

    #[error(transparent)]
    Mapping(#[from] codicon_mapping::Error),

    #[error(transparent)]
    Metadata(#[from] codicon_metadata::Error),

    #[error(transparent)]
    Version(#[from] codicon_version::Error),

    /// An icon SVG could not be turned into a sprite symbol.
    #[error("Invalid SVG for icon '{name}': {message}")]
    InvalidSvg { name: String, message: String },

    /// No icon from the mapping had an SVG file.
    #[error("No SVG files were processed from the mapping")]
    EmptySprite,

    /// Icons listed in the mapping have no SVG file.
    #[error("{} icons have no SVG file: {}", .0.len(), .0.join(", "))]
    MissingIcons(Vec<String>),

    /// An external program (font generator, git, npm) failed.
    #[error("{tool} failed: {message}")]
    ExternalTool { tool: String, message: String },

    /// Failed to read a compiled font.
    #[error("Font read error: {0}")]
    Font(#[from] read_fonts::ReadError),

    /// Invalid glob pattern.
    #[error("Invalid glob pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }

    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool { tool: tool.into(), message: message.into() }
    }
}
