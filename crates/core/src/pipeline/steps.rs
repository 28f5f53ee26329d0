//! Pipeline step definitions.

use std::fs::remove_dir_all;

use log::warn;

use super::{BuildContext, clean::clean};
use crate::{
    DiskAssets, Result,
    config::STAGING_DIR,
    embed::{embed_metadata_file, embed_svg_data_file},
    generator::{CommandGenerator, FontGenerator, GeneratorConfig, preflight},
    sprite::{SpriteOptions, SymbolSprite, build_sprite},
};

pub type PipelineStep = (&'static str, fn(&BuildContext) -> Result<()>);

pub const BUILD_STEPS: &[PipelineStep] = &[
    ("clean", step_clean),
    ("font", step_font),
    ("sprite", step_sprite),
    ("embed-metadata", step_embed_metadata),
    ("embed-svg-data", step_embed_svg_data),
];

pub const FONT_STEPS: &[PipelineStep] = &[("font", step_font)];

pub const SPRITE_STEPS: &[PipelineStep] = &[("sprite", step_sprite)];

pub const EMBED_STEPS: &[PipelineStep] =
    &[("embed-metadata", step_embed_metadata), ("embed-svg-data", step_embed_svg_data)];

fn step_clean(ctx: &BuildContext) -> Result<()> {
    clean(&ctx.paths.dist_dir)
}

fn step_font(ctx: &BuildContext) -> Result<()> {
    let svg_count = preflight(&ctx.paths)?;
    println!("  Found {svg_count} SVG files in {}", ctx.paths.icons_dir.display());

    let package = ctx.paths.load_package()?;
    let mut config = GeneratorConfig::new(&ctx.paths, &package, ctx.index.clone())?;

    let staging = ctx.paths.dist_dir.join(STAGING_DIR);
    if ctx.options.stage_icons {
        let copied = DiskAssets::new(&ctx.paths.icons_dir).stage_into(&staging)?;
        println!("  Staged {copied} SVG files in {}", staging.display());
        config = config.with_input_dir(&staging);
    }

    let generator =
        CommandGenerator::new(ctx.options.generator_command.clone(), &ctx.paths.root, ctx.runner);
    let result = generator.generate(&config);

    if ctx.options.stage_icons
        && let Err(e) = remove_dir_all(&staging)
    {
        warn!("Failed to remove {}: {e}", staging.display());
    }

    for artifact in result? {
        println!("  ✔ Generated {}", artifact.display());
    }
    Ok(())
}

fn step_sprite(ctx: &BuildContext) -> Result<()> {
    let options = SpriteOptions { require_all_icons: ctx.options.require_all_icons };
    build_sprite(
        &ctx.mapping,
        &ctx.index,
        &DiskAssets::new(&ctx.paths.icons_dir),
        &SymbolSprite,
        &ctx.sprite_output(),
        options,
    )?;
    Ok(())
}

fn step_embed_metadata(ctx: &BuildContext) -> Result<()> {
    embed_metadata_file(&ctx.paths.preview_html(), &ctx.paths.metadata)?;
    Ok(())
}

fn step_embed_svg_data(ctx: &BuildContext) -> Result<()> {
    embed_svg_data_file(&ctx.paths.preview_html(), &DiskAssets::new(&ctx.paths.icons_dir))?;
    Ok(())
}
