//! Sequence progression engine.
//!
//! Drives a session through the prompt catalog one prompt at a time:
//!
//! ```text
//! Fresh (cursor = 0)
//!     ↓ submit_response
//! InProgress (0 < cursor < N)
//!     ↓ submit_response (repeats)
//! Complete (cursor = N)   -- terminal, read-only
//! ```
//!
//! The engine is pure. `submit_response` never mutates its input; it returns
//! the next session, which the caller commits once persistence has
//! acknowledged it.

use super::model::{Response, Session, SessionPhase};
use crate::error::{KindredError, Result};
use crate::prompt::{Prompt, PromptCatalog};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct SequenceEngine {
    catalog: PromptCatalog,
}

impl SequenceEngine {
    pub fn new(catalog: PromptCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    pub fn prompt_count(&self) -> usize {
        self.catalog.len()
    }

    /// The prompt at the session's cursor, or `None` once complete.
    pub fn current_prompt(&self, session: &Session) -> Option<&Prompt> {
        self.catalog.get(session.cursor())
    }

    pub fn is_complete(&self, session: &Session) -> bool {
        session.cursor() >= self.catalog.len()
    }

    pub fn phase(&self, session: &Session) -> SessionPhase {
        match session.cursor() {
            0 => SessionPhase::Fresh,
            _ if self.is_complete(session) => SessionPhase::Complete,
            _ => SessionPhase::InProgress,
        }
    }

    /// Percentage of prompts answered, in `0.0..=100.0`.
    pub fn progress_percent(&self, session: &Session) -> f64 {
        if self.is_complete(session) {
            return 100.0;
        }
        100.0 * session.cursor() as f64 / self.catalog.len() as f64
    }

    /// Stages the next answer and returns the advanced session.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if every prompt has already been answered
    /// - `InvalidChoice` if `value` is not one of the current prompt's choices
    pub fn submit_response(&self, session: &Session, value: &str) -> Result<Session> {
        self.submit_response_at(session, value, Utc::now())
    }

    /// Same as [`submit_response`](Self::submit_response) with an explicit
    /// capture time.
    pub fn submit_response_at(
        &self,
        session: &Session,
        value: &str,
        captured_at: DateTime<Utc>,
    ) -> Result<Session> {
        let prompt = self
            .current_prompt(session)
            .ok_or(KindredError::SessionComplete)?;

        if !prompt.accepts(value) {
            return Err(KindredError::invalid_choice(prompt.id, value));
        }

        tracing::debug!(
            prompt_id = prompt.id,
            cursor = session.cursor(),
            "staging response"
        );

        Ok(session.appended(Response {
            prompt_id: prompt.id,
            value: value.to_string(),
            captured_at,
        }))
    }

    /// Submits the choice at `index` of the current prompt.
    pub fn submit_choice(&self, session: &Session, index: usize) -> Result<Session> {
        let prompt = self
            .current_prompt(session)
            .ok_or(KindredError::SessionComplete)?;
        let value = prompt
            .choice(index)
            .ok_or_else(|| {
                KindredError::invalid_choice(prompt.id, format!("#{}", index.saturating_add(1)))
            })?
            .to_string();
        self.submit_response(session, &value)
    }

    /// Rebuilds a session from a previously persisted response list.
    ///
    /// # Errors
    ///
    /// Returns `CorruptSession` if there are more responses than prompts, or
    /// if any response does not answer the prompt at its position with one
    /// of that prompt's choices. The list is never repaired.
    pub fn restore_session(&self, stored: Vec<Response>) -> Result<Session> {
        if stored.len() > self.catalog.len() {
            return Err(KindredError::corrupt(format!(
                "{} responses stored but only {} prompts exist",
                stored.len(),
                self.catalog.len()
            )));
        }

        for (index, (response, prompt)) in stored.iter().zip(self.catalog.iter()).enumerate() {
            if response.prompt_id != prompt.id {
                return Err(KindredError::corrupt(format!(
                    "response {} answers prompt {} but prompt {} is expected",
                    index, response.prompt_id, prompt.id
                )));
            }
            if !prompt.accepts(&response.value) {
                return Err(KindredError::corrupt(format!(
                    "response {} holds '{}' which is not a choice of prompt {}",
                    index, response.value, prompt.id
                )));
            }
        }

        Ok(Session::from_validated(stored))
    }
}
