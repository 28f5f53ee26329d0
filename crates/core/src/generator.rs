//! Font generator adapter.
//!
//! The TTF, CSS, and HTML preview are produced by an external generator. This
//! module builds its configuration from the project files, hands it over, and
//! checks that the expected artifacts appeared.

use std::path::{Path, PathBuf};

use codicon_mapping::AliasIndex;
use codicon_version::PackageDescriptor;
use log::info;
use serde::Serialize;

use crate::{
    Error, ProjectPaths, Result,
    config::{ASSET_TYPES, FONT_NAME, FONT_PREFIX, FONT_TYPES, GENERATOR_CONFIG_FILE, NORMALIZE},
    io::{glob_svgs, normalize_path, write_text},
    paths::require,
    process::CommandRunner,
};

/// Template paths handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Templates {
    pub html: String,
    pub css: String,
}

/// TTF naming fields, taken from the package descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TtfOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatOptions {
    pub ttf: TtfOptions,
}

/// Configuration object passed to the font generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub name: String,
    pub prefix: String,
    pub codepoints: AliasIndex,
    pub input_dir: String,
    pub output_dir: String,
    pub font_types: Vec<String>,
    pub normalize: bool,
    pub asset_types: Vec<String>,
    pub templates: Templates,
    pub format_options: FormatOptions,
}

impl GeneratorConfig {
    /// Build the configuration; every path is normalized to forward slashes.
    pub fn new(
        paths: &ProjectPaths,
        package: &PackageDescriptor,
        codepoints: AliasIndex,
    ) -> Result<Self> {
        Ok(Self {
            name: FONT_NAME.to_string(),
            prefix: FONT_PREFIX.to_string(),
            codepoints,
            input_dir: normalize_path(&paths.icons_dir),
            output_dir: normalize_path(&paths.dist_dir),
            font_types: FONT_TYPES.iter().map(|s| s.to_string()).collect(),
            normalize: NORMALIZE,
            asset_types: ASSET_TYPES.iter().map(|s| s.to_string()).collect(),
            templates: Templates {
                html: normalize_path(&paths.html_template),
                css: normalize_path(&paths.css_template),
            },
            format_options: FormatOptions {
                ttf: TtfOptions {
                    url: package.url().map(str::to_string),
                    description: package.description().map(str::to_string),
                    version: package.font_version()?.to_string(),
                },
            },
        })
    }

    /// Read icons from `dir` instead of the project icons directory.
    pub fn with_input_dir(mut self, dir: &Path) -> Self {
        self.input_dir = normalize_path(dir);
        self
    }

    /// Files the generator is expected to write.
    pub fn expected_outputs(&self) -> Vec<PathBuf> {
        let output_dir = PathBuf::from(&self.output_dir);
        self.font_types
            .iter()
            .chain(&self.asset_types)
            .map(|ext| output_dir.join(format!("{}.{ext}", self.name)))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::json(GENERATOR_CONFIG_FILE, e))
    }
}

/// Check every generator input before any output is produced.
///
/// Returns the number of SVG files in the icons directory.
pub fn preflight(paths: &ProjectPaths) -> Result<usize> {
    require("package.json", &paths.package)?;
    require("mapping.json", &paths.mapping)?;
    require("HTML template", &paths.html_template)?;
    require("CSS template", &paths.css_template)?;
    require("Input directory", &paths.icons_dir)?;

    let count = glob_svgs(&paths.icons_dir)?.len();
    if count == 0 {
        return Err(Error::NoIcons(paths.icons_dir.clone()));
    }
    info!("Found {count} SVG files in {}", paths.icons_dir.display());
    Ok(count)
}

/// Produces font artifacts from a [`GeneratorConfig`].
pub trait FontGenerator {
    /// Run the generator and return the artifacts it wrote.
    fn generate(&self, config: &GeneratorConfig) -> Result<Vec<PathBuf>>;
}

/// Runs an external generator command with the config written to disk.
///
/// The command receives `--config <output_dir>/.fantasticonrc.json`.
#[derive(Debug)]
pub struct CommandGenerator<R> {
    command: Vec<String>,
    cwd: PathBuf,
    runner: R,
}

impl<R: CommandRunner> CommandGenerator<R> {
    pub fn new(command: Vec<String>, cwd: impl Into<PathBuf>, runner: R) -> Self {
        Self { command, cwd: cwd.into(), runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: CommandRunner> FontGenerator for CommandGenerator<R> {
    fn generate(&self, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
        let Some((program, base_args)) = self.command.split_first() else {
            return Err(Error::tool("font generator", "no command configured"));
        };

        let config_path = Path::new(&config.output_dir).join(GENERATOR_CONFIG_FILE);
        write_text(&config_path, config.to_json()?)?;

        let mut args = base_args.to_vec();
        args.push("--config".to_string());
        args.push(normalize_path(&config_path));

        info!("Running {program} with inputDir: {}", config.input_dir);
        self.runner.run(program, &args, &self.cwd)?;

        let outputs = config.expected_outputs();
        if let Some(missing) = outputs.iter().find(|p| !p.exists()) {
            return Err(Error::tool(
                program.as_str(),
                format!("expected output {} was not written", missing.display()),
            ));
        }
        Ok(outputs)
    }
}
