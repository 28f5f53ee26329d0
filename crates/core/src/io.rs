//! Shared file I/O utilities and icon asset access.

use std::{
    collections::BTreeMap,
    fs::{copy, create_dir_all, read, read_to_string, write},
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern, glob_with};

use crate::{Error, Result};

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read a compiled font.
pub fn read_font(path: &Path) -> Result<Vec<u8>> {
    read(path).map_err(|e| Error::io(path, e))
}

/// Write a whole text file, creating the parent directory if needed.
pub fn write_text(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    ensure_parent_dir(path)?;
    write(path, contents).map_err(|e| Error::io(path, e))
}

/// Read, transform, and write back to the same file.
///
/// Returning `None` from `f` leaves the file untouched.
pub fn transform_text_in_place(
    path: &Path,
    f: impl FnOnce(&str) -> Result<Option<String>>,
) -> Result<bool> {
    let text = read_text(path)?;
    match f(&text)? {
        Some(new_text) => {
            write_text(path, new_text)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Create parent directory if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

/// Render a path with forward slashes only.
///
/// External tools match icon paths with glob patterns, which treat `\` as an
/// escape character.
pub fn normalize_path(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Find SVG files in a directory. The `.svg` extension matches in any case.
pub fn glob_svgs(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Path::new(&Pattern::escape(&dir.to_string_lossy())).join("*.svg");
    let pattern_str = pattern.to_string_lossy();
    let options = MatchOptions { case_sensitive: false, ..MatchOptions::new() };
    let entries = glob_with(&pattern_str, options).map_err(|e| Error::Pattern {
        pattern: pattern_str.to_string(),
        message: e.to_string(),
    })?;
    let mut paths: Vec<PathBuf> =
        entries.filter_map(|entry| entry.ok()).filter(|p| p.is_file()).collect();
    paths.sort();
    Ok(paths)
}

/// Read access to icon SVGs by file stem.
pub trait AssetStore {
    /// Human-readable location, used in messages and virtual sprite paths.
    fn location(&self) -> String;

    /// Whether an icon store exists at all.
    fn is_available(&self) -> bool;

    /// Whether `<name>.svg` exists.
    fn contains(&self, name: &str) -> bool;

    /// Contents of `<name>.svg`.
    fn read_svg(&self, name: &str) -> Result<String>;

    /// Stems of every SVG in the store, sorted.
    fn svg_names(&self) -> Result<Vec<String>>;
}

/// Icons stored as `<name>.svg` files in one directory.
#[derive(Debug, Clone)]
pub struct DiskAssets {
    dir: PathBuf,
}

impl DiskAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `<name>.svg`, with the extension in any case.
    fn svg_path(&self, name: &str) -> Option<PathBuf> {
        let exact = self.dir.join(format!("{name}.svg"));
        if exact.is_file() {
            return Some(exact);
        }
        glob_svgs(&self.dir)
            .ok()?
            .into_iter()
            .find(|path| path.file_stem().and_then(|s| s.to_str()) == Some(name))
    }

    /// Copy every SVG into `target` with a flat layout.
    pub fn stage_into(&self, target: &Path) -> Result<usize> {
        create_dir_all(target).map_err(|e| Error::io(target, e))?;
        let sources = glob_svgs(&self.dir)?;
        for source in &sources {
            let Some(file_name) = source.file_name() else {
                continue;
            };
            let dest = target.join(file_name);
            copy(source, &dest).map_err(|e| Error::io(source, e))?;
        }
        Ok(sources.len())
    }
}

impl AssetStore for DiskAssets {
    fn location(&self) -> String {
        normalize_path(&self.dir)
    }

    fn is_available(&self) -> bool {
        self.dir.is_dir()
    }

    fn contains(&self, name: &str) -> bool {
        self.svg_path(name).is_some()
    }

    fn read_svg(&self, name: &str) -> Result<String> {
        let path = self.svg_path(name).unwrap_or_else(|| self.dir.join(format!("{name}.svg")));
        read_text(&path)
    }

    fn svg_names(&self) -> Result<Vec<String>> {
        Ok(glob_svgs(&self.dir)?
            .iter()
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect())
    }
}

/// In-memory icon store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    svgs: BTreeMap<String, String>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_svg(mut self, name: impl Into<String>, svg: impl Into<String>) -> Self {
        self.svgs.insert(name.into(), svg.into());
        self
    }
}

impl AssetStore for MemoryAssets {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn is_available(&self) -> bool {
        true
    }

    fn contains(&self, name: &str) -> bool {
        self.svgs.contains_key(name)
    }

    fn read_svg(&self, name: &str) -> Result<String> {
        self.svgs.get(name).cloned().ok_or_else(|| {
            Error::io(
                format!("memory/{name}.svg"),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such icon"),
            )
        })
    }

    fn svg_names(&self) -> Result<Vec<String>> {
        Ok(self.svgs.keys().cloned().collect())
    }
}

/// Read every SVG of a store into a name → source map.
pub fn collect_svgs(store: &impl AssetStore) -> Result<BTreeMap<String, String>> {
    store
        .svg_names()?
        .into_iter()
        .map(|name| {
            let svg = store.read_svg(&name)?;
            Ok((name, svg))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(r"C:\work\codicons\src\icons"), "C:/work/codicons/src/icons");
        assert_eq!(normalize_path("/already/fine"), "/already/fine");
        assert_eq!(normalize_path(r"mixed/sep\here"), "mixed/sep/here");
    }

    #[test]
    fn test_memory_assets() {
        let store = MemoryAssets::new().with_svg("b", "<svg/>").with_svg("a", "<svg></svg>");
        assert!(store.contains("a"));
        assert!(!store.contains("c"));
        assert_eq!(store.svg_names().unwrap(), vec!["a", "b"]);
        assert!(store.read_svg("c").is_err());
        assert_eq!(collect_svgs(&store).unwrap().len(), 2);
    }

    #[test]
    fn test_disk_assets() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path().join("add.svg"), "<svg/>").unwrap();
        write(dir.path().join("close.SVG"), "<svg/>").unwrap();
        write(dir.path().join("notes.txt"), "nope").unwrap();

        let store = DiskAssets::new(dir.path());
        assert!(store.is_available());
        assert!(store.contains("add"));
        assert!(store.contains("close"));
        assert_eq!(store.svg_names().unwrap(), vec!["add", "close"]);
        assert_eq!(collect_svgs(&store).unwrap().len(), 2);

        let staged = dir.path().join("staged");
        assert_eq!(store.stage_into(&staged).unwrap(), 2);
        assert!(staged.join("add.svg").is_file());
        assert!(!staged.join("notes.txt").exists());
    }

    #[test]
    fn test_disk_assets_any_extension_case() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path().join("gear.Svg"), "<svg/>").unwrap();

        let store = DiskAssets::new(dir.path());
        assert_eq!(store.svg_names().unwrap(), vec!["gear"]);
        assert!(store.contains("gear"));
        assert_eq!(store.read_svg("gear").unwrap(), "<svg/>");
    }

    #[test]
    fn test_glob_svgs_escapes_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("icons [v2] *");
        create_dir_all(&dir).unwrap();
        write(dir.join("add.svg"), "<svg/>").unwrap();

        let found = glob_svgs(&dir).unwrap();
        assert_eq!(found, vec![dir.join("add.svg")]);
        assert!(DiskAssets::new(&dir).contains("add"));
    }

    #[test]
    fn test_transform_text_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/file.txt");
        write_text(&path, "hello").unwrap();

        assert!(transform_text_in_place(&path, |t| Ok(Some(t.to_uppercase()))).unwrap());
        assert_eq!(read_text(&path).unwrap(), "HELLO");

        assert!(!transform_text_in_place(&path, |_| Ok(None)).unwrap());
        assert_eq!(read_text(&path).unwrap(), "HELLO");
    }
}
