//! Package and font version bumping.
//!
//! The package descriptor carries two independent versions: the package
//! `version` (`major.minor.patch`) and the `fontVersion` (`major.minor`)
//! embedded in the generated TTF.

mod bump;
mod descriptor;

use std::result;

pub use bump::{BumpKind, FontBumpKind, FontVersion, PackageVersion, bump_font_version, bump_semver};
pub use descriptor::{BumpOutcome, PackageDescriptor};

/// Errors raised while parsing or bumping versions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid version format: '{value}'. Expected {expected}")]
    InvalidVersionFormat { value: String, expected: &'static str },

    #[error("Invalid {target} bump type: '{value}'. Must be one of: {allowed}")]
    InvalidBumpKind { target: &'static str, value: String, allowed: &'static str },

    #[error("version component overflow while bumping '{0}'")]
    Overflow(String),

    #[error("package descriptor has no string field '{0}'")]
    MissingField(&'static str),

    #[error("failed to parse package descriptor: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;
