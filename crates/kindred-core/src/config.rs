use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{Display, EnumString};

/// Which record service backs the application.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StorageBackend {
    /// In-memory tables seeded with mock profiles. Nothing survives the process.
    #[default]
    Memory,
    /// One TOML file per record kind under the data directory.
    Toml,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageBackend,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `kindred_application=debug`.
    pub log_level: String,
    /// Participants recorded on newly started simulations.
    pub participants: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            data_dir: None,
            log_level: "info".to_string(),
            participants: vec!["user1".to_string(), "user2".to_string()],
        }
    }
}
