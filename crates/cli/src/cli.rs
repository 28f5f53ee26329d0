//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use codicon_core::{AliasMode, BuildOptions, ProjectPaths, config::DIST_DIR};

use crate::commands;

#[derive(Parser)]
#[command(name = "codicon")]
#[command(about = "Build, check, and release the codicon icon font")]
pub struct Cli {
    /// Project root containing package.json and src/.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.command.run(ProjectPaths::new(self.root))
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct BuildArgs {
    #[arg(long, alias = "out-dir", default_value = DIST_DIR)]
    pub dist_dir: PathBuf,
    /// Let a later codepoint take over an alias already claimed by an earlier one.
    #[arg(long)]
    pub lenient_aliases: bool,
    /// Copy icons into a staging directory before generating the font.
    #[arg(long)]
    pub stage: bool,
    /// Fail when an icon in the mapping has no SVG.
    #[arg(long)]
    pub require_all_icons: bool,
    /// Font generator command, e.g. `--generator npx --generator fantasticon`.
    #[arg(long = "generator", value_name = "ARG")]
    pub generator_command: Vec<String>,
}

impl BuildArgs {
    pub fn options(&self) -> BuildOptions {
        let mut options = BuildOptions::default();
        if self.lenient_aliases {
            options.alias_mode = AliasMode::Lenient;
        }
        options.stage_icons |= self.stage;
        options.require_all_icons = self.require_all_icons;
        if !self.generator_command.is_empty() {
            options.generator_command = self.generator_command.clone();
        }
        options
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct VersionBumpArgs {
    /// Package version bump: patch, minor, or major.
    #[arg(default_value = "patch")]
    pub package_bump: String,
    /// Font version bump: minor or major.
    #[arg(default_value = "minor")]
    pub font_bump: String,
    /// Commit package.json after bumping.
    #[arg(short, long)]
    pub commit: bool,
    /// Create an annotated tag (implies --commit).
    #[arg(short, long)]
    pub tag: bool,
    /// Push the commit and tags (implies --commit).
    #[arg(short, long)]
    pub push: bool,
    /// Run npm install to refresh package-lock.json.
    #[arg(short = 'i', long)]
    pub npm_install: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean, generate the font, build the sprite, and embed preview data.
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Generate the font, stylesheet, and preview page.
    Font {
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Compile every icon into a single SVG sprite.
    Sprite {
        #[command(flatten)]
        args: BuildArgs,
        /// Sprite file name inside the output directory.
        #[arg(long)]
        out_file: Option<PathBuf>,
    },
    /// Embed metadata and SVG sources into the generated preview page.
    Embed {
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Report metadata coverage and invalid metadata records.
    CheckMetadata,
    /// Bump the package and font versions in package.json.
    VersionBump {
        #[command(flatten)]
        args: VersionBumpArgs,
    },
    /// Export the glyph table of a compiled font as CSV.
    Export {
        font: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that every mapped codepoint is present in a compiled font.
    VerifyFont { font: PathBuf },
    /// Remove and recreate the output directory.
    Clean {
        #[arg(long, default_value = DIST_DIR)]
        dist_dir: PathBuf,
    },
}

impl Commands {
    pub fn run(self, paths: ProjectPaths) -> Result<()> {
        match self {
            Commands::Build { args } => commands::build(paths, &args)?,
            Commands::Font { args } => commands::font(paths, &args)?,
            Commands::Sprite { args, out_file } => {
                commands::sprite(paths, &args, out_file)?;
            }
            Commands::Embed { args } => commands::embed(paths, &args)?,
            Commands::CheckMetadata => commands::check_metadata(&paths)?,
            Commands::VersionBump { args } => commands::version_bump(&paths, &args)?,
            Commands::Export { font, output } => {
                commands::export(&font, output.as_deref())?;
            }
            Commands::VerifyFont { font } => commands::verify_font(&paths, &font)?,
            Commands::Clean { dist_dir } => {
                commands::clean(&paths.with_dist_dir(dist_dir))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("codicon").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn build_defaults_to_strict_aliases() {
        let Commands::Build { args } = parse(&["build"]).command else {
            panic!("expected build");
        };
        let options = args.options();
        assert_eq!(options.alias_mode, AliasMode::Strict);
        assert_eq!(args.dist_dir, PathBuf::from(DIST_DIR));
        assert_eq!(options.generator_command, vec!["npx", "fantasticon"]);
    }

    #[test]
    fn build_flags_map_to_options() {
        let cli = parse(&[
            "--root",
            "project",
            "sprite",
            "--out-dir",
            "out",
            "--lenient-aliases",
            "--require-all-icons",
            "--out-file",
            "icons.svg",
        ]);
        assert_eq!(cli.root, PathBuf::from("project"));
        let Commands::Sprite { args, out_file } = cli.command else {
            panic!("expected sprite");
        };
        let options = args.options();
        assert_eq!(options.alias_mode, AliasMode::Lenient);
        assert!(options.require_all_icons);
        assert_eq!(args.dist_dir, PathBuf::from("out"));
        assert_eq!(out_file, Some(PathBuf::from("icons.svg")));
    }

    #[test]
    fn generator_override() {
        let Commands::Font { args } =
            parse(&["font", "--generator", "node", "--generator", "gen.js"]).command
        else {
            panic!("expected font");
        };
        assert_eq!(args.options().generator_command, vec!["node", "gen.js"]);
    }

    #[test]
    fn version_bump_positionals_and_flags() {
        let Commands::VersionBump { args } = parse(&["version-bump"]).command else {
            panic!("expected version-bump");
        };
        assert_eq!(args.package_bump, "patch");
        assert_eq!(args.font_bump, "minor");
        assert!(!args.commit);

        let Commands::VersionBump { args } =
            parse(&["version-bump", "major", "major", "-t", "-p", "-i"]).command
        else {
            panic!("expected version-bump");
        };
        assert_eq!(args.package_bump, "major");
        assert_eq!(args.font_bump, "major");
        assert!(args.tag && args.push && args.npm_install);
    }

    #[test]
    fn invalid_bump_kind_parses_and_fails_later() {
        let Commands::VersionBump { args } = parse(&["version-bump", "huge"]).command else {
            panic!("expected version-bump");
        };
        assert!(commands::bump_request(&args).is_err());
    }
}
