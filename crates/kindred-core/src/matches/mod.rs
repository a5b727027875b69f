//! Match domain module.
//!
//! Typed view over `match` records. The module is not called `match`
//! because that is a keyword.

mod model;

// Re-export public API
pub use model::{Match, field};
