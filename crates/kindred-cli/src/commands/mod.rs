pub mod config;
pub mod discover;
pub mod matches;
pub mod profile;
pub mod prompts;
pub mod simulate;
