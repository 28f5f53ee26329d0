//! Build pipeline for the codicon font, sprite, and preview.

mod clean;
mod steps;

pub use clean::clean;
pub use steps::{BUILD_STEPS, EMBED_STEPS, FONT_STEPS, PipelineStep, SPRITE_STEPS};

use std::{path::PathBuf, time::Instant};

use codicon_mapping::{AliasIndex, AliasMode, Mapping};

use crate::{
    ProjectPaths, Result,
    config::{GENERATOR_COMMAND, SPRITE_FILE},
    process::CommandRunner,
};

/// Knobs shared by every build command.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub alias_mode: AliasMode,
    /// Copy icons into a flat staging directory before running the generator.
    pub stage_icons: bool,
    /// Fail the sprite step when an icon has no SVG.
    pub require_all_icons: bool,
    /// Font generator program and leading arguments.
    pub generator_command: Vec<String>,
    /// Sprite file, relative to the output directory.
    pub sprite_file: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            alias_mode: AliasMode::default(),
            stage_icons: cfg!(windows),
            require_all_icons: false,
            generator_command: GENERATOR_COMMAND.iter().map(|s| s.to_string()).collect(),
            sprite_file: PathBuf::from(SPRITE_FILE),
        }
    }
}

/// Everything a step needs, loaded once before the first step runs.
pub struct BuildContext<'a> {
    pub paths: ProjectPaths,
    pub options: BuildOptions,
    pub mapping: Mapping,
    pub index: AliasIndex,
    pub runner: &'a dyn CommandRunner,
}

impl<'a> BuildContext<'a> {
    pub fn load(
        paths: ProjectPaths,
        options: BuildOptions,
        runner: &'a dyn CommandRunner,
    ) -> Result<Self> {
        let mapping = paths.load_mapping()?;
        let index = mapping.index(options.alias_mode)?;
        Ok(Self { paths, options, mapping, index, runner })
    }

    pub fn sprite_output(&self) -> PathBuf {
        self.paths.dist_dir.join(&self.options.sprite_file)
    }
}

pub fn run_step(
    name: &str,
    step_num: usize,
    total: usize,
    ctx: &BuildContext,
    f: impl Fn(&BuildContext) -> Result<()>,
) -> Result<()> {
    println!("\n[{step_num}/{total}] {name}");
    let start = Instant::now();
    f(ctx)?;
    println!("  ✓ {name} ({:.2}s)", start.elapsed().as_secs_f64());
    Ok(())
}

pub fn run_steps(steps: &[PipelineStep], ctx: &BuildContext) -> Result<()> {
    for (i, (name, step_fn)) in steps.iter().enumerate() {
        run_step(name, i + 1, steps.len(), ctx, step_fn)?;
    }
    Ok(())
}

/// Run a list of steps with a banner and timing summary.
pub fn run_pipeline(title: &str, steps: &[PipelineStep], ctx: &BuildContext) -> Result<()> {
    let start = Instant::now();
    let rule = "═".repeat(79);

    println!("{rule}");
    println!("{title}");
    println!("{rule}");
    println!("  Codepoints: {} ({} aliases)", ctx.mapping.len(), ctx.index.len());

    run_steps(steps, ctx)?;

    println!("\n{rule}");
    println!("✨ Done in {:.2}s", start.elapsed().as_secs_f64());
    println!("   Output: {}", ctx.paths.dist_dir.display());
    println!("{rule}");
    Ok(())
}
