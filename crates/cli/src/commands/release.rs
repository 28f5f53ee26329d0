//! Version bump command.

use anyhow::{Context, Result};
use codicon_core::{BumpRequest, ProjectPaths, bump_versions, process::SystemRunner};

use crate::cli::VersionBumpArgs;

/// Parse bump kinds here rather than in clap so bad values exit with status 1.
pub fn bump_request(args: &VersionBumpArgs) -> Result<BumpRequest> {
    Ok(BumpRequest {
        package: args.package_bump.parse().context("package version bump")?,
        font: args.font_bump.parse().context("font version bump")?,
        commit: args.commit,
        tag: args.tag,
        push: args.push,
        npm_install: args.npm_install,
    })
}

pub fn version_bump(paths: &ProjectPaths, args: &VersionBumpArgs) -> Result<()> {
    let request = bump_request(args)?;
    bump_versions(paths, &request, &SystemRunner)?;
    Ok(())
}
