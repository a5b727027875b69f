//! Unified path management for kindred files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/kindred/           # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/kindred/      # Data directory
//! └── records/                 # TomlRecordService tables
//!     ├── profile.toml
//!     ├── simulation.toml
//!     └── ...
//! ```
//!
//! A base directory override places both trees under one root, which is how
//! tests and `data_dir` in the config keep everything in one place.

use kindred_core::error::{KindredError, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "kindred";

#[derive(Debug, Clone, Default)]
pub struct KindredPaths {
    base_dir: Option<PathBuf>,
}

impl KindredPaths {
    /// Creates a path resolver.
    ///
    /// With `Some(base)`, config lives in `base/config` and data in
    /// `base/data`; otherwise the platform directories are used.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(base) => Ok(base.join("config")),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_NAME))
                .ok_or_else(|| KindredError::config("Cannot determine config directory")),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(base) => Ok(base.join("data")),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_NAME))
                .ok_or_else(|| KindredError::config("Cannot determine data directory")),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn records_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("records"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override() {
        let paths = KindredPaths::new(Some(Path::new("/tmp/kindred-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/kindred-test/config/config.toml")
        );
        assert_eq!(
            paths.records_dir().unwrap(),
            PathBuf::from("/tmp/kindred-test/data/records")
        );
    }
}
