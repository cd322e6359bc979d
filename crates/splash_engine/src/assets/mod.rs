//! Asset management system
//!
//! Assets are plain files bundled next to the application. The manager resolves a
//! name against its search paths in order and reads the file fully into memory.

pub mod font_loader;

pub use font_loader::{FontError, FontFace, FontLoader, FontSource};

use std::path::PathBuf;
use thiserror::Error;

use crate::core::AssetConfig;

/// Asset management system
pub struct AssetManager {
    search_paths: Vec<PathBuf>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new(config: &AssetConfig) -> Self {
        log::debug!("Asset search paths: {:?}", config.search_paths);
        Self {
            search_paths: config.search_paths.iter().map(PathBuf::from).collect(),
        }
    }

    /// Find the first search path that contains `name`
    pub fn resolve(&self, name: &str) -> Result<PathBuf, AssetError> {
        self.search_paths
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    /// Open an asset and read all of its bytes
    pub fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(name)?;
        let bytes = std::fs::read(&path)?;
        log::debug!("Read {} bytes from {:?}", bytes.len(), path);
        Ok(bytes)
    }
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_for(dirs: &[&std::path::Path]) -> AssetManager {
        AssetManager::new(&AssetConfig {
            search_paths: dirs.iter().map(|d| d.display().to_string()).collect(),
        })
    }

    #[test]
    fn test_search_path_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("font.ttf"), b"second").unwrap();

        let assets = manager_for(&[first.path(), second.path()]);
        assert_eq!(assets.read("font.ttf").unwrap(), b"second");

        std::fs::write(first.path().join("font.ttf"), b"first").unwrap();
        assert_eq!(assets.read("font.ttf").unwrap(), b"first");
        assert_eq!(assets.resolve("font.ttf").unwrap(), first.path().join("font.ttf"));
    }

    #[test]
    fn test_missing_asset() {
        let dir = tempfile::tempdir().unwrap();
        let assets = manager_for(&[dir.path()]);
        assert!(matches!(assets.read("nope.ttf"), Err(AssetError::NotFound(name)) if name == "nope.ttf"));
    }

    #[test]
    fn test_directories_are_not_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("fonts")).unwrap();
        let assets = manager_for(&[dir.path()]);
        assert!(assets.resolve("fonts").is_err());
    }
}
