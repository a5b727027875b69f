//! Error types for the Kindred application.

use thiserror::Error;

/// A shared error type for the entire Kindred application.
///
/// Local validation failures (`InvalidChoice`, `CorruptSession`,
/// `SessionComplete`, `SubmissionInFlight`) are raised by the conversation
/// engine before any state changes, `InvalidProfile` by profile setup before
/// anything is written. `NotFound` and `Write` come from the
/// record service and are surfaced unchanged to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KindredError {
    /// The submitted value is not one of the current prompt's choices.
    #[error("Invalid choice for prompt {prompt_id}: '{value}'")]
    InvalidChoice { prompt_id: u32, value: String },

    /// Stored responses cannot be aligned with the prompt table.
    #[error("Corrupt session: {0}")]
    CorruptSession(String),

    /// The session has already answered every prompt.
    #[error("Session is already complete")]
    SessionComplete,

    /// The session still has unanswered prompts.
    #[error("Session is not complete yet")]
    SessionIncomplete,

    /// Another submission on the same session has not resolved yet.
    #[error("A submission is already in flight for this session")]
    SubmissionInFlight,

    /// A profile draft is missing required information.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Record not found with kind information
    #[error("Record not found: {kind} '{id}'")]
    NotFound { kind: String, id: String },

    /// Record service rejected or failed a write
    #[error("Write error: {0}")]
    Write(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KindredError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Creates an InvalidChoice error
    pub fn invalid_choice(prompt_id: u32, value: impl Into<String>) -> Self {
        Self::InvalidChoice {
            prompt_id,
            value: value.into(),
        }
    }

    /// Creates a CorruptSession error
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptSession(message.into())
    }

    /// Creates an InvalidProfile error
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile(message.into())
    }

    /// Creates a Write error
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an InvalidChoice error
    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, Self::InvalidChoice { .. })
    }

    /// Check if this is a CorruptSession error
    pub fn is_corrupt_session(&self) -> bool {
        matches!(self, Self::CorruptSession(_))
    }

    /// Check if this is an InvalidProfile error
    pub fn is_invalid_profile(&self) -> bool {
        matches!(self, Self::InvalidProfile(_))
    }

    /// Check if this is a Write error
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }

    /// Whether retrying the same operation later may succeed.
    ///
    /// Persistence failures are retryable; validation failures are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Write(_) | Self::Io { .. } | Self::SubmissionInFlight
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for KindredError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for KindredError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for KindredError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for KindredError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, KindredError>`.
pub type Result<T> = std::result::Result<T, KindredError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(KindredError::write("boom").is_retryable());
        assert!(KindredError::io("disk").is_retryable());
        assert!(!KindredError::invalid_choice(1, "nope").is_retryable());
        assert!(!KindredError::corrupt("bad").is_retryable());
        assert!(!KindredError::SessionComplete.is_retryable());
        assert!(!KindredError::invalid_profile("bio is required").is_retryable());
    }

    #[test]
    fn test_not_found_display() {
        let err = KindredError::not_found("simulation", "42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Record not found: simulation '42'");
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: KindredError = io.into();
        match err {
            KindredError::Io { message } => assert!(message.contains("NotFound")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
