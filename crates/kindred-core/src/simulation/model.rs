//! Simulation record model.
//!
//! A simulation is the persisted form of one guided conversation: who takes
//! part, which prompts are asked, the answers so far and whether the run
//! has finished.

use crate::conversation::Response;
use crate::error::{KindredError, Result};
use crate::record::{Fields, Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::{Display, EnumString};

/// Field names of the `simulation` table.
pub mod field {
    pub const NAME: &str = "Name";
    pub const PARTICIPANTS: &str = "participants";
    pub const QUESTION_SEQUENCE: &str = "question_sequence";
    pub const RESPONSES: &str = "responses";
    pub const COMPLETION_RATE: &str = "completion_rate";
    pub const INSIGHTS: &str = "insights";
    pub const STARTED_AT: &str = "started_at";
    pub const COMPLETED_AT: &str = "completed_at";
    pub const STATUS: &str = "status";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SimulationStatus {
    #[default]
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub id: RecordId,
    pub name: String,
    pub participants: Vec<String>,
    pub question_sequence: Vec<u32>,
    pub responses: Vec<Response>,
    pub completion_rate: f64,
    pub insights: Fields,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: SimulationStatus,
}

impl Simulation {
    /// Decodes a `simulation` record.
    ///
    /// `responses` may be stored either as an array or as a JSON-encoded
    /// string holding that array; both forms are accepted.
    pub fn from_record(record: &Record) -> Result<Self> {
        let status = match record.str_field(field::STATUS) {
            None => SimulationStatus::default(),
            Some(raw) => raw.parse().map_err(|_| {
                KindredError::corrupt(format!(
                    "simulation {} has unknown status '{}'",
                    record.id, raw
                ))
            })?,
        };

        Ok(Self {
            id: record.id,
            name: record.str_field(field::NAME).unwrap_or_default().to_string(),
            participants: record.field_or_default(field::PARTICIPANTS)?,
            question_sequence: record.field_or_default(field::QUESTION_SEQUENCE)?,
            responses: decode_responses(record)?,
            completion_rate: record.field_or_default(field::COMPLETION_RATE)?,
            insights: record.field_or_default(field::INSIGHTS)?,
            started_at: record.field(field::STARTED_AT)?,
            completed_at: record.field(field::COMPLETED_AT)?,
            status,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == SimulationStatus::Active
    }

    /// Fields for a newly started simulation.
    pub fn creation_fields(
        name: &str,
        participants: &[String],
        question_sequence: &[u32],
        started_at: DateTime<Utc>,
    ) -> Fields {
        let mut fields = Fields::new();
        fields.insert(field::NAME.into(), json!(name));
        fields.insert(field::PARTICIPANTS.into(), json!(participants));
        fields.insert(field::QUESTION_SEQUENCE.into(), json!(question_sequence));
        fields.insert(field::RESPONSES.into(), json!([]));
        fields.insert(field::COMPLETION_RATE.into(), json!(0.0));
        fields.insert(field::INSIGHTS.into(), json!({}));
        fields.insert(field::STARTED_AT.into(), json!(started_at));
        fields.insert(field::STATUS.into(), json!(SimulationStatus::Active));
        fields
    }

    /// Partial update written after each accepted answer.
    pub fn progress_fields(responses: &[Response], completion_rate: f64) -> Fields {
        let mut fields = Fields::new();
        fields.insert(field::RESPONSES.into(), json!(responses));
        fields.insert(field::COMPLETION_RATE.into(), json!(completion_rate));
        fields
    }

    /// Partial update marking the simulation as finished.
    pub fn completion_fields(responses: &[Response], completed_at: DateTime<Utc>) -> Fields {
        let mut fields = Self::progress_fields(responses, 100.0);
        fields.insert(field::STATUS.into(), json!(SimulationStatus::Completed));
        fields.insert(field::COMPLETED_AT.into(), json!(completed_at));
        fields
    }
}

fn decode_responses(record: &Record) -> Result<Vec<Response>> {
    match record.fields.get(field::RESPONSES) {
        Some(Value::String(encoded)) if encoded.trim().is_empty() => Ok(Vec::new()),
        Some(Value::String(encoded)) => serde_json::from_str(encoded).map_err(|e| {
            KindredError::corrupt(format!(
                "simulation {} has unreadable responses: {}",
                record.id, e
            ))
        }),
        _ => record.field_or_default(field::RESPONSES),
    }
}
