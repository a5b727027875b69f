//! The app user's own profile.

use crate::conversation::Response;
use crate::error::{KindredError, Result};
use crate::profile::{LoveLanguage, MbtiType, decode_love_languages, decode_mbti};
use crate::record::{Fields, Record, RecordId};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use strum::Display;

/// Field names of the `user` table.
pub mod field {
    pub use crate::profile::field::{
        AGE, BIO, INTERESTS, LOCATION, LOVE_LANGUAGES, MBTI_TYPE, NAME, PHOTO,
    };

    pub const QUESTION_RESPONSES: &str = "question_responses";
    pub const CREATED_AT: &str = "created_at";
    pub const IS_ACTIVE: &str = "is_active";
}

/// Youngest and oldest accepted ages.
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 18..=120;

/// Upper bound on love languages a profile may pick.
pub const MAX_LOVE_LANGUAGES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: RecordId,
    pub name: String,
    pub age: Option<u32>,
    pub location: String,
    pub photo: Option<String>,
    pub bio: String,
    pub mbti_type: Option<MbtiType>,
    pub love_languages: Vec<LoveLanguage>,
    pub question_responses: Vec<Response>,
    pub interests: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl UserProfile {
    /// Decodes a `user` record. A missing `is_active` reads as inactive.
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.id,
            name: record.str_field(field::NAME).unwrap_or_default().to_string(),
            age: record.field(field::AGE)?,
            location: record.str_field(field::LOCATION).unwrap_or_default().to_string(),
            photo: record.field(field::PHOTO)?,
            bio: record.str_field(field::BIO).unwrap_or_default().to_string(),
            mbti_type: decode_mbti(record),
            love_languages: decode_love_languages(record)?,
            question_responses: decode_question_responses(record)?,
            interests: record.field_or_default(field::INTERESTS)?,
            created_at: record.field(field::CREATED_AT)?,
            is_active: record.field_or_default(field::IS_ACTIVE)?,
        })
    }
}

fn decode_question_responses(record: &Record) -> Result<Vec<Response>> {
    match record.fields.get(field::QUESTION_RESPONSES) {
        Some(Value::String(encoded)) if encoded.trim().is_empty() => Ok(Vec::new()),
        Some(Value::String(encoded)) => Ok(serde_json::from_str(encoded)?),
        _ => record.field_or_default(field::QUESTION_RESPONSES),
    }
}

/// The steps of profile setup, in the order they are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SetupStep {
    #[strum(to_string = "basic info")]
    BasicInfo,
    #[strum(to_string = "personality")]
    Personality,
    #[strum(to_string = "love languages")]
    LoveLanguages,
}

impl SetupStep {
    pub const ALL: [SetupStep; 3] = [Self::BasicInfo, Self::Personality, Self::LoveLanguages];
}

/// Unsaved profile input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub age: u32,
    pub location: String,
    pub bio: String,
    /// Falls back to a generated avatar when empty.
    pub photo: Option<String>,
    pub mbti_type: Option<MbtiType>,
    pub love_languages: Vec<LoveLanguage>,
    pub interests: Vec<String>,
    pub question_responses: Vec<Response>,
}

impl ProfileDraft {
    /// Checks the fields belonging to one setup step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` naming the step and the first missing field.
    pub fn check_step(&self, step: SetupStep) -> Result<()> {
        let problem = match step {
            SetupStep::BasicInfo => {
                if self.name.trim().is_empty() {
                    Some("name is required".to_string())
                } else if !AGE_RANGE.contains(&self.age) {
                    Some(format!(
                        "age must be between {} and {}",
                        AGE_RANGE.start(),
                        AGE_RANGE.end()
                    ))
                } else if self.location.trim().is_empty() {
                    Some("location is required".to_string())
                } else if self.bio.trim().is_empty() {
                    Some("bio is required".to_string())
                } else {
                    None
                }
            }
            SetupStep::Personality => self
                .mbti_type
                .is_none()
                .then(|| "an MBTI type is required".to_string()),
            SetupStep::LoveLanguages => {
                let count = self.love_languages.len();
                if count == 0 || count > MAX_LOVE_LANGUAGES {
                    Some(format!(
                        "choose between 1 and {} love languages",
                        MAX_LOVE_LANGUAGES
                    ))
                } else if (1..count)
                    .any(|i| self.love_languages[..i].contains(&self.love_languages[i]))
                {
                    Some("love languages must not repeat".to_string())
                } else {
                    None
                }
            }
        };

        match problem {
            Some(message) => Err(KindredError::invalid_profile(format!("{}: {}", step, message))),
            None => Ok(()),
        }
    }

    /// The first step that still fails its checks.
    pub fn first_incomplete_step(&self) -> Option<SetupStep> {
        SetupStep::ALL
            .into_iter()
            .find(|step| self.check_step(*step).is_err())
    }

    pub fn validate(&self) -> Result<()> {
        SetupStep::ALL
            .into_iter()
            .try_for_each(|step| self.check_step(step))
    }

    /// Fields for a new, active `user` record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if the draft does not validate.
    pub fn creation_fields(&self, created_at: DateTime<Utc>) -> Result<Fields> {
        self.validate()?;

        let name = self.name.trim();
        let photo = self
            .photo
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_avatar_url(name));

        let mut fields = Fields::new();
        fields.insert(field::NAME.into(), json!(name));
        fields.insert(field::AGE.into(), json!(self.age));
        fields.insert(field::LOCATION.into(), json!(self.location.trim()));
        fields.insert(field::BIO.into(), json!(self.bio.trim()));
        fields.insert(field::PHOTO.into(), json!(photo));
        fields.insert(field::MBTI_TYPE.into(), json!(self.mbti_type));
        fields.insert(field::LOVE_LANGUAGES.into(), json!(self.love_languages));
        fields.insert(field::INTERESTS.into(), json!(self.interests));
        fields.insert(field::QUESTION_RESPONSES.into(), json!(self.question_responses));
        fields.insert(field::CREATED_AT.into(), json!(created_at));
        fields.insert(field::IS_ACTIVE.into(), json!(true));
        Ok(fields)
    }
}

/// Generated initials avatar used when no photo is given.
pub fn default_avatar_url(name: &str) -> String {
    let name = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!(
        "https://ui-avatars.com/api/?name={}&background=e91e63&color=fff&size=400",
        name
    )
}
