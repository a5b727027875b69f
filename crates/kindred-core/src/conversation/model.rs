//! Conversation session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// A user's recorded selection for one prompt.
///
/// Created exactly once per prompt and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Id of the prompt this answers.
    pub prompt_id: u32,
    /// The selected choice, verbatim.
    pub value: String,
    /// When the answer was captured.
    pub captured_at: DateTime<Utc>,
}

/// The ordered answers given so far in one run of the question sequence.
///
/// The cursor is not stored: it is always the number of responses, so the
/// two can never disagree. Sessions only grow through
/// [`SequenceEngine::submit_response`](super::SequenceEngine::submit_response)
/// and are only rebuilt from storage through
/// [`SequenceEngine::restore_session`](super::SequenceEngine::restore_session).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    responses: Vec<Response>,
}

impl Session {
    /// A fresh session with no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next unanswered prompt.
    pub fn cursor(&self) -> usize {
        self.responses.len()
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn into_responses(self) -> Vec<Response> {
        self.responses
    }

    /// Returns a copy of this session with `response` appended.
    pub(crate) fn appended(&self, response: Response) -> Self {
        let mut responses = Vec::with_capacity(self.responses.len() + 1);
        responses.extend_from_slice(&self.responses);
        responses.push(response);
        Self { responses }
    }

    pub(crate) fn from_validated(responses: Vec<Response>) -> Self {
        Self { responses }
    }
}

/// Where a session stands in the fixed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// No answers yet.
    Fresh,
    /// Some, but not all, prompts answered.
    InProgress,
    /// Every prompt answered. Terminal.
    Complete,
}
