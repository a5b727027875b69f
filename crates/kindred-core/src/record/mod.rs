//! Record domain module.
//!
//! - `model`: `Record`, `RecordKind`, `RecordId`, `Fields`
//! - `service`: the `RecordService` capability trait

mod model;
pub mod service;

// Re-export public API
pub use model::{Fields, Record, RecordId, RecordKind};
pub use service::RecordService;
