//! Shared handle that guards a flow against overlapping submissions.

use crate::simulation_usecase::{ConversationFlow, SimulationUseCase, SubmitOutcome};
use kindred_core::conversation::Session;
use kindred_core::error::{KindredError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A cloneable handle to one conversation flow.
///
/// The flow is locked for the whole submit round-trip, including the
/// record-service write. A second submission while the first is still
/// awaiting persistence is rejected with `SubmissionInFlight` instead of
/// queueing behind it, so a double click cannot append two answers.
#[derive(Debug, Clone)]
pub struct ConversationHandle {
    flow: Arc<Mutex<ConversationFlow>>,
}

impl ConversationHandle {
    pub fn new(flow: ConversationFlow) -> Self {
        Self {
            flow: Arc::new(Mutex::new(flow)),
        }
    }

    /// Whether a submission is currently awaiting persistence.
    pub fn is_busy(&self) -> bool {
        self.flow.try_lock().is_err()
    }

    /// A copy of the committed session.
    pub async fn session(&self) -> Session {
        self.flow.lock().await.session().clone()
    }

    pub async fn submit(&self, usecase: &SimulationUseCase, value: &str) -> Result<SubmitOutcome> {
        let mut flow = self
            .flow
            .try_lock()
            .map_err(|_| KindredError::SubmissionInFlight)?;
        usecase.submit(&mut flow, value).await
    }

    pub async fn submit_choice(
        &self,
        usecase: &SimulationUseCase,
        index: usize,
    ) -> Result<SubmitOutcome> {
        let mut flow = self
            .flow
            .try_lock()
            .map_err(|_| KindredError::SubmissionInFlight)?;
        usecase.submit_choice(&mut flow, index).await
    }

    pub async fn finalize(&self, usecase: &SimulationUseCase) -> Result<()> {
        let mut flow = self
            .flow
            .try_lock()
            .map_err(|_| KindredError::SubmissionInFlight)?;
        usecase.finalize(&mut flow).await
    }
}
