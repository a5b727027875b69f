//! Configuration service implementation.
//!
//! Loads the application configuration from `<config_dir>/config.toml`.

use crate::paths::KindredPaths;
use crate::storage::AtomicTomlFile;
use kindred_core::config::AppConfig;
use kindred_core::error::{KindredError, Result};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the application configuration.
///
/// A missing or empty file yields `AppConfig::default()`; nothing is written
/// until [`save`](Self::save) is called.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: KindredPaths,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(paths: KindredPaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| KindredError::internal("config cache lock poisoned"))?;
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.file()?.load()?.unwrap_or_default();
        tracing::debug!(storage = %loaded.storage, "loaded configuration");

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| KindredError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Writes `config` to disk and refreshes the cache.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        self.file()?.save(config)?;
        let mut write_lock = self
            .config
            .write()
            .map_err(|_| KindredError::internal("config cache lock poisoned"))?;
        *write_lock = Some(config.clone());
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Paths for the data tree, honouring `data_dir` from the config.
    pub fn data_paths(&self) -> Result<KindredPaths> {
        let config = self.get_config()?;
        Ok(match config.data_dir {
            Some(dir) => KindredPaths::new(Some(&dir)),
            None => self.paths.clone(),
        })
    }

    fn file(&self) -> Result<AtomicTomlFile<AppConfig>> {
        Ok(AtomicTomlFile::new(self.paths.config_file()?))
    }
}
