//! Application layer for Kindred.
//!
//! This crate provides use case implementations that coordinate the domain
//! core with injected record and notification services.

pub mod conversation_handle;
pub mod discover_usecase;
pub mod matches_usecase;
pub mod profile_setup_usecase;
pub mod simulation_usecase;

pub use conversation_handle::ConversationHandle;
pub use discover_usecase::DiscoverUseCase;
pub use matches_usecase::MatchesUseCase;
pub use profile_setup_usecase::ProfileSetupUseCase;
pub use simulation_usecase::{ConversationFlow, SimulationUseCase, SubmitOutcome};
