//! Build commands: full build, font, sprite, and preview embedding.

use std::path::PathBuf;

use anyhow::Result;
use codicon_core::{
    BUILD_STEPS, BuildContext, EMBED_STEPS, FONT_STEPS, ProjectPaths, SPRITE_STEPS,
    pipeline::PipelineStep, process::SystemRunner, run_pipeline,
};

use crate::cli::BuildArgs;

fn run(
    title: &str,
    steps: &[PipelineStep],
    paths: ProjectPaths,
    args: &BuildArgs,
    out_file: Option<PathBuf>,
) -> Result<()> {
    let mut options = args.options();
    if let Some(out_file) = out_file {
        options.sprite_file = out_file;
    }
    let runner = SystemRunner;
    let ctx = BuildContext::load(paths.with_dist_dir(&args.dist_dir), options, &runner)?;
    run_pipeline(title, steps, &ctx)?;
    Ok(())
}

pub fn build(paths: ProjectPaths, args: &BuildArgs) -> Result<()> {
    run("Building codicon", BUILD_STEPS, paths, args, None)
}

pub fn font(paths: ProjectPaths, args: &BuildArgs) -> Result<()> {
    run("Generating codicon font", FONT_STEPS, paths, args, None)
}

pub fn sprite(paths: ProjectPaths, args: &BuildArgs, out_file: Option<PathBuf>) -> Result<()> {
    run("Building codicon sprite", SPRITE_STEPS, paths, args, out_file)
}

pub fn embed(paths: ProjectPaths, args: &BuildArgs) -> Result<()> {
    run("Embedding preview data", EMBED_STEPS, paths, args, None)
}

pub fn clean(paths: &ProjectPaths) -> Result<()> {
    codicon_core::clean(&paths.dist_dir)?;
    println!("Cleaned {}", paths.dist_dir.display());
    Ok(())
}
