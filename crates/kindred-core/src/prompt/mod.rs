//! Prompt domain module.
//!
//! # Module Structure
//!
//! - `model`: the `Prompt` value object
//! - `catalog`: the validated, ordered `PromptCatalog` and the built-in table

mod catalog;
mod model;

// Re-export public API
pub use catalog::PromptCatalog;
pub use model::Prompt;
