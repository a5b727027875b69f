//! In-memory RecordService implementation.

use crate::mock_data;
use async_trait::async_trait;
use kindred_core::error::{KindredError, Result};
use kindred_core::record::{Fields, Record, RecordId, RecordKind, RecordService};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Debug)]
struct Table {
    next_id: RecordId,
    records: BTreeMap<RecordId, Record>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }
}

/// Record service that keeps every table in process memory.
///
/// Ids start at 1 per kind and are never reused. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryRecordService {
    tables: RwLock<HashMap<RecordKind, Table>>,
}

impl InMemoryRecordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service pre-populated with the mock profile and match datasets.
    pub fn with_mock_data() -> Self {
        Self::with_tables([
            (RecordKind::Profile, mock_data::profiles()),
            (RecordKind::Match, mock_data::matches()),
        ])
    }

    /// A service whose `kind` table holds `rows`, with ids assigned from 1.
    pub fn with_records(kind: RecordKind, rows: Vec<Fields>) -> Self {
        Self::with_tables([(kind, rows)])
    }

    /// Like [`with_records`](Self::with_records) for several tables at once.
    pub fn with_tables(seed: impl IntoIterator<Item = (RecordKind, Vec<Fields>)>) -> Self {
        let mut tables = HashMap::new();
        for (kind, rows) in seed {
            let table: &mut Table = tables.entry(kind).or_default();
            for fields in rows {
                let id = table.next_id;
                table.next_id += 1;
                let mut record = Record::new(id, Fields::new());
                record.merge(fields);
                table.records.insert(id, record);
            }
        }

        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl RecordService for InMemoryRecordService {
    async fn get_all(&self, kind: RecordKind) -> Result<Vec<Record>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&kind)
            .map(|table| table.records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_by_id(&self, kind: RecordKind, id: RecordId) -> Result<Record> {
        let tables = self.tables.read().await;
        tables
            .get(&kind)
            .and_then(|table| table.records.get(&id))
            .cloned()
            .ok_or_else(|| KindredError::not_found(kind.as_ref(), id.to_string()))
    }

    async fn create(&self, kind: RecordKind, fields: Fields) -> Result<Record> {
        let mut tables = self.tables.write().await;
        let table = tables.entry(kind).or_default();

        let id = table.next_id;
        table.next_id += 1;
        let mut record = Record::new(id, Fields::new());
        record.merge(fields);
        table.records.insert(id, record.clone());

        tracing::debug!(%kind, id, "created record");
        Ok(record)
    }

    async fn update(&self, kind: RecordKind, id: RecordId, fields: Fields) -> Result<Record> {
        let mut tables = self.tables.write().await;
        let record = tables
            .get_mut(&kind)
            .and_then(|table| table.records.get_mut(&id))
            .ok_or_else(|| KindredError::not_found(kind.as_ref(), id.to_string()))?;

        record.merge(fields);
        tracing::debug!(%kind, id, "updated record");
        Ok(record.clone())
    }

    async fn delete(&self, kind: RecordKind, id: RecordId) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let removed = tables
            .get_mut(&kind)
            .and_then(|table| table.records.remove(&id))
            .is_some();
        Ok(removed)
    }
}
