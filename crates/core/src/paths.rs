//! Project layout and one-shot loading of the configuration files.

use std::path::{Path, PathBuf};

use codicon_mapping::Mapping;
use codicon_metadata::MetadataFile;
use codicon_version::PackageDescriptor;
use log::debug;

use crate::{
    Error, Result,
    config::{
        CSS_TEMPLATE, DIST_DIR, FONT_NAME, HTML_TEMPLATE, ICONS_DIR, MAPPING_FILE, METADATA_FILE,
        PACKAGE_FILE,
    },
    io::read_text,
};

/// Resolved locations of every input and output of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub icons_dir: PathBuf,
    pub mapping: PathBuf,
    pub metadata: PathBuf,
    pub html_template: PathBuf,
    pub css_template: PathBuf,
    pub package: PathBuf,
    pub dist_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            icons_dir: root.join(ICONS_DIR),
            mapping: root.join(MAPPING_FILE),
            metadata: root.join(METADATA_FILE),
            html_template: root.join(HTML_TEMPLATE),
            css_template: root.join(CSS_TEMPLATE),
            package: root.join(PACKAGE_FILE),
            dist_dir: root.join(DIST_DIR),
            root,
        }
    }

    pub fn with_dist_dir(mut self, dist_dir: impl AsRef<Path>) -> Self {
        self.dist_dir = self.root.join(dist_dir);
        self
    }

    /// Generated font file.
    pub fn font_output(&self) -> PathBuf {
        self.dist_dir.join(format!("{FONT_NAME}.ttf"))
    }

    /// Generated HTML preview.
    pub fn preview_html(&self) -> PathBuf {
        self.dist_dir.join(format!("{FONT_NAME}.html"))
    }

    /// Generated stylesheet.
    pub fn stylesheet(&self) -> PathBuf {
        self.dist_dir.join(format!("{FONT_NAME}.css"))
    }

    pub fn load_mapping(&self) -> Result<Mapping> {
        let text = read_required("mapping.json", &self.mapping)?;
        let mapping = Mapping::from_json(&text)?;
        debug!("loaded {} codepoints from {}", mapping.len(), self.mapping.display());
        Ok(mapping)
    }

    pub fn load_metadata(&self) -> Result<MetadataFile> {
        let text = read_required("metadata.json", &self.metadata)?;
        Ok(MetadataFile::from_json(&text)?)
    }

    pub fn load_package(&self) -> Result<PackageDescriptor> {
        let text = read_required("package.json", &self.package)?;
        Ok(PackageDescriptor::from_json(&text)?)
    }
}

/// Fail with [`Error::ConfigNotFound`] if `path` doesn't exist.
pub fn require(what: &'static str, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::ConfigNotFound { what, path: path.to_path_buf() })
    }
}

fn read_required(what: &'static str, path: &Path) -> Result<String> {
    require(what, path)?;
    read_text(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let paths = ProjectPaths::new("/work");
        assert_eq!(paths.icons_dir, Path::new("/work/src/icons"));
        assert_eq!(paths.mapping, Path::new("/work/src/template/mapping.json"));
        assert_eq!(paths.package, Path::new("/work/package.json"));
        assert_eq!(paths.font_output(), Path::new("/work/dist/codicon.ttf"));

        let paths = paths.with_dist_dir("out");
        assert_eq!(paths.preview_html(), Path::new("/work/out/codicon.html"));
    }

    #[test]
    fn test_missing_mapping_is_config_not_found() {
        let paths = ProjectPaths::new("/definitely/not/here");
        assert!(matches!(
            paths.load_mapping(),
            Err(Error::ConfigNotFound { what: "mapping.json", .. })
        ));
    }
}
