//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: `Profile`, `MbtiType`, `LoveLanguage`
//! - `filter`: `ProfileFilter` used by the discovery view

mod filter;
mod model;

// Re-export public API
pub use filter::ProfileFilter;
pub use model::{LoveLanguage, MbtiType, Profile, field};
pub(crate) use model::{decode_love_languages, decode_mbti, decode_score};
