use std::{
    fs::{create_dir_all, remove_dir_all},
    path::Path,
};

use crate::{Error, Result};

/// Remove the output directory and recreate it empty.
pub fn clean(dist_dir: &Path) -> Result<()> {
    if dist_dir.exists() {
        remove_dir_all(dist_dir).map_err(|e| Error::io(dist_dir, e))?;
        println!("  Removed {}", dist_dir.display());
    } else {
        println!("  Skipped {} (not found)", dist_dir.display());
    }

    create_dir_all(dist_dir).map_err(|e| Error::io(dist_dir, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;

    #[test]
    fn test_clean_recreates_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().join("dist");
        create_dir_all(dist.join("nested")).unwrap();
        write(dist.join("codicon.ttf"), b"old").unwrap();

        clean(&dist).unwrap();
        assert!(dist.is_dir());
        assert_eq!(dist.read_dir().unwrap().count(), 0);
    }

    #[test]
    fn test_clean_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().join("dist");
        clean(&dist).unwrap();
        assert!(dist.is_dir());
    }
}
