//! Simulation use case.
//!
//! Coordinates the conversation engine with the record service: starting a
//! simulation, resuming the active one, persisting each answer and marking
//! the run complete.
//!
//! Submission is two-phase. The engine stages the next session, the full
//! response list is written to the record service, and only after that
//! write is acknowledged does the flow commit the staged session. A failed
//! write leaves the flow exactly as it was.

use chrono::Utc;
use kindred_core::conversation::{SequenceEngine, Session, SessionPhase};
use kindred_core::error::{KindredError, Result};
use kindred_core::notification::NotificationSink;
use kindred_core::record::{Record, RecordId, RecordKind, RecordService};
use kindred_core::simulation::{Simulation, SimulationStatus, field};
use std::sync::Arc;

/// One user's run through the question sequence.
///
/// Owned exclusively by whoever drives the conversation. Mutation only
/// happens through [`SimulationUseCase::submit`] and
/// [`SimulationUseCase::finalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationFlow {
    simulation_id: RecordId,
    session: Session,
    finalized: bool,
}

impl ConversationFlow {
    pub fn simulation_id(&self) -> RecordId {
        self.simulation_id
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the terminal status has been written to the record service.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

/// Result of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// The answer was stored and more prompts remain.
    Advanced { cursor: usize, progress: f64 },
    /// The answer was the last one and the simulation is marked completed.
    Completed,
}

pub struct SimulationUseCase {
    records: Arc<dyn RecordService>,
    notifier: Arc<dyn NotificationSink>,
    engine: SequenceEngine,
    participants: Vec<String>,
}

impl SimulationUseCase {
    pub fn new(
        records: Arc<dyn RecordService>,
        notifier: Arc<dyn NotificationSink>,
        engine: SequenceEngine,
    ) -> Self {
        Self {
            records,
            notifier,
            engine,
            participants: Vec::new(),
        }
    }

    /// Participants recorded on simulations started by this use case.
    pub fn with_participants(mut self, participants: Vec<String>) -> Self {
        self.participants = participants;
        self
    }

    pub fn engine(&self) -> &SequenceEngine {
        &self.engine
    }

    pub fn phase(&self, flow: &ConversationFlow) -> SessionPhase {
        self.engine.phase(&flow.session)
    }

    pub fn progress_percent(&self, flow: &ConversationFlow) -> f64 {
        self.engine.progress_percent(&flow.session)
    }

    /// Creates a new active simulation and returns a fresh flow for it.
    pub async fn start(&self) -> Result<ConversationFlow> {
        let started_at = Utc::now();
        let name = format!("Simulation {}", started_at.format("%Y-%m-%d %H:%M"));
        let fields = Simulation::creation_fields(
            &name,
            &self.participants,
            &self.engine.catalog().ids(),
            started_at,
        );

        let record = match self.records.create(RecordKind::Simulation, fields).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "failed to create simulation");
                self.notifier.error("Failed to start simulation");
                return Err(e);
            }
        };

        tracing::info!(simulation_id = record.id, "simulation started");
        self.notifier.success("Simulation started!");

        Ok(ConversationFlow {
            simulation_id: record.id,
            session: Session::new(),
            finalized: false,
        })
    }

    /// Restores the first active simulation, if there is one.
    ///
    /// # Errors
    ///
    /// Returns `CorruptSession` if the stored responses do not line up with
    /// the prompt catalog. The record is left untouched.
    pub async fn resume(&self) -> Result<Option<ConversationFlow>> {
        let records = self.records.get_all(RecordKind::Simulation).await?;
        let Some(record) = records.iter().find(|r| is_active(r)) else {
            tracing::debug!("no active simulation");
            return Ok(None);
        };

        match self.restore(record) {
            Ok(flow) => {
                let message = match self.engine.current_prompt(&flow.session) {
                    Some(_) => format!(
                        "Resumed simulation at question {} of {}",
                        flow.session.cursor() + 1,
                        self.engine.prompt_count()
                    ),
                    None => "Resumed simulation with every question answered".to_string(),
                };
                self.notifier.info(&message);
                Ok(Some(flow))
            }
            Err(e) => {
                tracing::warn!(simulation_id = record.id, error = %e, "cannot resume simulation");
                self.notifier.error("Failed to resume simulation");
                Err(e)
            }
        }
    }

    fn restore(&self, record: &Record) -> Result<ConversationFlow> {
        let simulation = Simulation::from_record(record)?;

        if !simulation.question_sequence.is_empty()
            && simulation.question_sequence != self.engine.catalog().ids()
        {
            return Err(KindredError::corrupt(format!(
                "simulation {} was started with questions {:?}",
                simulation.id, simulation.question_sequence
            )));
        }

        let session = self.engine.restore_session(simulation.responses)?;
        Ok(ConversationFlow {
            simulation_id: simulation.id,
            session,
            finalized: simulation.status == SimulationStatus::Completed,
        })
    }

    /// Answers the current prompt with `value`.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` / `InvalidChoice` before anything is written
    /// - any record-service error from the progress write; `flow` is unchanged
    /// - any record-service error from the completion write; the answer is
    ///   committed and [`finalize`](Self::finalize) should be retried
    pub async fn submit(&self, flow: &mut ConversationFlow, value: &str) -> Result<SubmitOutcome> {
        let staged = self.engine.submit_response(&flow.session, value)?;
        self.commit(flow, staged).await
    }

    /// Answers the current prompt with the choice at `index`.
    pub async fn submit_choice(
        &self,
        flow: &mut ConversationFlow,
        index: usize,
    ) -> Result<SubmitOutcome> {
        let staged = self.engine.submit_choice(&flow.session, index)?;
        self.commit(flow, staged).await
    }

    async fn commit(&self, flow: &mut ConversationFlow, staged: Session) -> Result<SubmitOutcome> {
        let progress = self.engine.progress_percent(&staged);
        let fields = Simulation::progress_fields(staged.responses(), progress);

        if let Err(e) = self
            .records
            .update(RecordKind::Simulation, flow.simulation_id, fields)
            .await
        {
            tracing::warn!(
                simulation_id = flow.simulation_id,
                cursor = flow.session.cursor(),
                error = %e,
                "response not persisted, session left unchanged"
            );
            self.notifier.error("Failed to send response");
            return Err(e);
        }

        flow.session = staged;
        tracing::debug!(
            simulation_id = flow.simulation_id,
            cursor = flow.session.cursor(),
            progress,
            "response committed"
        );

        if self.engine.is_complete(&flow.session) {
            self.finalize(flow).await?;
            Ok(SubmitOutcome::Completed)
        } else {
            Ok(SubmitOutcome::Advanced {
                cursor: flow.session.cursor(),
                progress,
            })
        }
    }

    /// Writes the terminal `completed` status for a complete session.
    ///
    /// Does nothing if the flow is already finalized.
    ///
    /// # Errors
    ///
    /// Returns `SessionIncomplete` if prompts remain unanswered, or the
    /// record-service error if the write fails.
    pub async fn finalize(&self, flow: &mut ConversationFlow) -> Result<()> {
        if flow.finalized {
            return Ok(());
        }
        if !self.engine.is_complete(&flow.session) {
            return Err(KindredError::SessionIncomplete);
        }

        let fields = Simulation::completion_fields(flow.session.responses(), Utc::now());
        if let Err(e) = self
            .records
            .update(RecordKind::Simulation, flow.simulation_id, fields)
            .await
        {
            tracing::warn!(simulation_id = flow.simulation_id, error = %e, "failed to complete simulation");
            self.notifier.error("Failed to complete simulation");
            return Err(e);
        }

        flow.finalized = true;
        tracing::info!(simulation_id = flow.simulation_id, "simulation completed");
        self.notifier.success("Simulation completed!");
        Ok(())
    }

    /// Id of the first active simulation.
    ///
    /// Unlike [`resume`](Self::resume) this does not restore the session, so
    /// it also finds an active simulation whose stored responses are corrupt.
    pub async fn active_id(&self) -> Result<Option<RecordId>> {
        let records = self.records.get_all(RecordKind::Simulation).await?;
        Ok(records.iter().find(|r| is_active(r)).map(|r| r.id))
    }

    /// Deletes the simulation record behind `flow`.
    pub async fn abandon(&self, flow: ConversationFlow) -> Result<bool> {
        self.abandon_id(flow.simulation_id).await
    }

    /// Deletes the simulation record `id` without reading its contents.
    pub async fn abandon_id(&self, id: RecordId) -> Result<bool> {
        let removed = self.records.delete(RecordKind::Simulation, id).await?;
        if removed {
            tracing::info!(simulation_id = id, "simulation abandoned");
            self.notifier.info("Simulation discarded");
        }
        Ok(removed)
    }

    /// Every stored simulation, oldest first.
    pub async fn history(&self) -> Result<Vec<Simulation>> {
        self.records
            .get_all(RecordKind::Simulation)
            .await?
            .iter()
            .map(Simulation::from_record)
            .collect()
    }
}

/// Records without a status predate the status field and count as active.
fn is_active(record: &Record) -> bool {
    record
        .str_field(field::STATUS)
        .is_none_or(|s| s == SimulationStatus::Active.to_string())
}
