//! Conversation domain module.
//!
//! This module contains the guided-conversation session model and the
//! engine that advances it through the prompt catalog.
//!
//! # Module Structure
//!
//! - `model`: `Response`, `Session`, `SessionPhase`
//! - `engine`: `SequenceEngine`, the pure progression logic
//!
//! # Usage
//!
//! ```
//! use kindred_core::conversation::{SequenceEngine, Session};
//! use kindred_core::prompt::PromptCatalog;
//!
//! let engine = SequenceEngine::new(PromptCatalog::builtin());
//! let session = Session::new();
//! let next = engine.submit_choice(&session, 0).unwrap();
//! assert_eq!(next.cursor(), 1);
//! assert_eq!(engine.progress_percent(&next), 20.0);
//! ```

mod engine;
mod model;

// Re-export public API
pub use engine::SequenceEngine;
pub use model::{Response, Session, SessionPhase};
