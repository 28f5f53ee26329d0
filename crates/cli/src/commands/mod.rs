//! CLI command implementations.

mod build;
mod check;
mod release;

pub use build::{build, clean, embed, font, sprite};
pub use check::{check_metadata, export, verify_font};
pub use release::{bump_request, version_bump};
