pub mod config;
pub mod conversation;
pub mod error;
pub mod matches;
pub mod notification;
pub mod profile;
pub mod prompt;
pub mod record;
pub mod simulation;
pub mod user;

// Re-export common error type
pub use error::KindredError;
