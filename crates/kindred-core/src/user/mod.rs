//! User profile domain module.
//!
//! # Module Structure
//!
//! - `model`: `UserProfile` (decoded `user` record) and `ProfileDraft`
//!   (unsaved input checked step by step before it is written)

mod model;

// Re-export public API
pub use model::{
    AGE_RANGE, MAX_LOVE_LANGUAGES, ProfileDraft, SetupStep, UserProfile, default_avatar_url, field,
};
