//! Codicon Core - build pipeline logic for the codicon icon font.

pub mod check;
pub mod config;
pub mod embed;
pub mod error;
pub mod generator;
pub mod glyphs;
pub mod io;
pub mod paths;
pub mod pipeline;
pub mod process;
pub mod release;
pub mod sprite;

pub use check::{check_font, check_metadata};
pub use error::{Error, Result};
pub use io::{AssetStore, DiskAssets, MemoryAssets, normalize_path};
pub use paths::ProjectPaths;
pub use pipeline::{
    BUILD_STEPS, BuildContext, BuildOptions, EMBED_STEPS, FONT_STEPS, SPRITE_STEPS, clean,
    run_pipeline, run_steps,
};
pub use release::{BumpRequest, bump_versions};

pub use codicon_mapping::{AliasIndex, AliasMode, Mapping};
pub use codicon_metadata::{MetadataFile, MetadataReport};
pub use codicon_version::{BumpKind, BumpOutcome, FontBumpKind, PackageDescriptor};
