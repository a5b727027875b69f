//! TOML-file RecordService implementation.

use crate::paths::KindredPaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use kindred_core::error::{KindredError, Result};
use kindred_core::record::{Fields, Record, RecordId, RecordKind, RecordService};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk layout of one record kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordTable {
    next_id: RecordId,
    #[serde(default)]
    records: Vec<Record>,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

impl RecordTable {
    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

/// Record service persisting each kind to its own TOML file.
///
/// Directory structure:
/// ```text
/// records_dir/
/// ├── profile.toml
/// ├── simulation.toml
/// └── ...
/// ```
///
/// Writes go through `AtomicTomlFile::update`, so each create, update or
/// delete is a locked, atomic replacement of the whole table. File I/O runs
/// on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct TomlRecordService {
    records_dir: PathBuf,
}

impl TomlRecordService {
    /// Creates a service storing tables under the data directory of `paths`.
    pub fn new(paths: &KindredPaths) -> Result<Self> {
        Ok(Self::at(paths.records_dir()?))
    }

    /// Creates a service storing tables directly in `records_dir`.
    pub fn at(records_dir: impl AsRef<Path>) -> Self {
        Self {
            records_dir: records_dir.as_ref().to_path_buf(),
        }
    }

    fn file(&self, kind: RecordKind) -> AtomicTomlFile<RecordTable> {
        AtomicTomlFile::new(self.records_dir.join(format!("{}.toml", kind)))
    }

    async fn read_table(&self, kind: RecordKind) -> Result<RecordTable> {
        let file = self.file(kind);
        run_blocking(move || Ok(file.load()?.unwrap_or_default())).await
    }

    /// Runs a locked read-modify-write, reporting storage failures as `Write`.
    async fn write_table<F, R>(&self, kind: RecordKind, f: F) -> Result<R>
    where
        F: FnOnce(&mut RecordTable) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let file = self.file(kind);
        run_blocking(move || file.update(RecordTable::default(), f))
            .await
            .map_err(|e| match e {
                KindredError::NotFound { .. } | KindredError::Write(_) => e,
                other => KindredError::write(format!("Failed to write {} table: {}", kind, other)),
            })
    }
}

async fn run_blocking<F, R>(f: F) -> Result<R>
where
    F: FnOnce() -> Result<R> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| KindredError::internal(format!("storage task failed: {}", e)))?
}

#[async_trait]
impl RecordService for TomlRecordService {
    async fn get_all(&self, kind: RecordKind) -> Result<Vec<Record>> {
        let mut records = self.read_table(kind).await?.records;
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn get_by_id(&self, kind: RecordKind, id: RecordId) -> Result<Record> {
        self.read_table(kind)
            .await?
            .records
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| KindredError::not_found(kind.as_ref(), id.to_string()))
    }

    async fn create(&self, kind: RecordKind, fields: Fields) -> Result<Record> {
        let record = self
            .write_table(kind, move |table| {
                let id = table.next_id;
                table.next_id += 1;
                let mut record = Record::new(id, Fields::new());
                record.merge(fields);
                table.records.push(record.clone());
                Ok(record)
            })
            .await?;

        tracing::debug!(%kind, id = record.id, "created record");
        Ok(record)
    }

    async fn update(&self, kind: RecordKind, id: RecordId, fields: Fields) -> Result<Record> {
        let record = self
            .write_table(kind, move |table| {
                let index = table
                    .position(id)
                    .ok_or_else(|| KindredError::not_found(kind.as_ref(), id.to_string()))?;
                let record = &mut table.records[index];
                record.merge(fields);
                Ok(record.clone())
            })
            .await?;

        tracing::debug!(%kind, id, "updated record");
        Ok(record)
    }

    async fn delete(&self, kind: RecordKind, id: RecordId) -> Result<bool> {
        self.write_table(kind, move |table| {
            Ok(match table.position(id) {
                Some(index) => {
                    table.records.remove(index);
                    true
                }
                None => false,
            })
        })
        .await
    }
}
