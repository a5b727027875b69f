//! Builds the configured RecordService.

use crate::in_memory_record_service::InMemoryRecordService;
use crate::paths::KindredPaths;
use crate::toml_record_service::TomlRecordService;
use kindred_core::config::{AppConfig, StorageBackend};
use kindred_core::error::Result;
use kindred_core::record::RecordService;
use std::sync::Arc;

/// Creates the record service selected by `config.storage`.
///
/// `paths` locates the data directory for file-backed storage; a
/// `data_dir` in the config takes precedence.
pub fn build_record_service(
    config: &AppConfig,
    paths: &KindredPaths,
) -> Result<Arc<dyn RecordService>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("using in-memory record service with mock data");
            Ok(Arc::new(InMemoryRecordService::with_mock_data()))
        }
        StorageBackend::Toml => {
            let paths = match &config.data_dir {
                Some(dir) => KindredPaths::new(Some(dir)),
                None => paths.clone(),
            };
            let service = TomlRecordService::new(&paths)?;
            tracing::info!(dir = ?paths.records_dir()?, "using TOML record service");
            Ok(Arc::new(service))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::record::{Fields, RecordKind};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_backend_has_mock_profiles() {
        let service =
            build_record_service(&AppConfig::default(), &KindredPaths::default()).unwrap();
        assert!(!service.get_all(RecordKind::Profile).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toml_backend_writes_under_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            storage: StorageBackend::Toml,
            data_dir: Some(temp_dir.path().to_path_buf()),
            ..AppConfig::default()
        };

        let service = build_record_service(&config, &KindredPaths::default()).unwrap();
        service.create(RecordKind::Match, Fields::new()).await.unwrap();

        assert!(temp_dir.path().join("data/records/match.toml").exists());
    }
}
