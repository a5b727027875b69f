//! Record service trait.
//!
//! Defines the CRUD capability every persisted entity goes through.

use super::model::{Fields, Record, RecordId, RecordKind};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract CRUD service over named record tables.
///
/// One implementation serves every record kind, decoupling the
/// application's use cases from the specific storage mechanism (in-memory
/// mock data, TOML files, a remote record store).
///
/// Services are constructed explicitly and handed to the use cases that
/// need them; there is no process-wide client.
#[async_trait]
pub trait RecordService: Send + Sync {
    /// Lists every record of `kind`, ordered by id.
    async fn get_all(&self, kind: RecordKind) -> Result<Vec<Record>>;

    /// Fetches one record.
    ///
    /// # Returns
    ///
    /// - `Ok(Record)`: Record found
    /// - `Err(KindredError::NotFound)`: No record with that id
    async fn get_by_id(&self, kind: RecordKind, id: RecordId) -> Result<Record>;

    /// Creates a record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `KindredError::Write` if the record could not be stored.
    async fn create(&self, kind: RecordKind, fields: Fields) -> Result<Record>;

    /// Merges `fields` into an existing record and returns the result.
    ///
    /// # Errors
    ///
    /// - `KindredError::NotFound` if the record does not exist
    /// - `KindredError::Write` if the update could not be stored
    async fn update(&self, kind: RecordKind, id: RecordId, fields: Fields) -> Result<Record>;

    /// Deletes a record.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Record deleted
    /// - `Ok(false)`: Record did not exist
    /// - `Err(_)`: Storage failure
    async fn delete(&self, kind: RecordKind, id: RecordId) -> Result<bool>;
}
