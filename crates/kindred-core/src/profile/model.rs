//! Profile domain model.

use crate::error::Result;
use crate::record::{Record, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

/// Field names of the `profile` table.
pub mod field {
    pub const NAME: &str = "Name";
    pub const AGE: &str = "age";
    pub const LOCATION: &str = "location";
    pub const PHOTO: &str = "photo";
    pub const BIO: &str = "bio";
    pub const MBTI_TYPE: &str = "mbti_type";
    pub const LOVE_LANGUAGES: &str = "love_languages";
    pub const COMPATIBILITY_SCORE: &str = "compatibility_score";
    pub const INTERESTS: &str = "interests";
    pub const IS_ONLINE: &str = "is_online";
}

/// The sixteen Myers-Briggs personality types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum MbtiType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

/// The five love languages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString,
)]
pub enum LoveLanguage {
    #[serde(rename = "Words of Affirmation")]
    #[strum(to_string = "Words of Affirmation", serialize = "words")]
    WordsOfAffirmation,
    #[serde(rename = "Acts of Service")]
    #[strum(to_string = "Acts of Service", serialize = "service")]
    ActsOfService,
    #[serde(rename = "Receiving Gifts")]
    #[strum(to_string = "Receiving Gifts", serialize = "gifts")]
    ReceivingGifts,
    #[serde(rename = "Quality Time")]
    #[strum(to_string = "Quality Time", serialize = "time")]
    QualityTime,
    #[serde(rename = "Physical Touch")]
    #[strum(to_string = "Physical Touch", serialize = "touch")]
    PhysicalTouch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: RecordId,
    pub name: String,
    pub age: Option<u32>,
    pub location: String,
    pub photo: Option<String>,
    pub bio: String,
    pub mbti_type: Option<MbtiType>,
    pub love_languages: Vec<LoveLanguage>,
    pub compatibility_score: u8,
    pub interests: Vec<String>,
    pub is_online: bool,
}

impl Profile {
    /// Decodes a `profile` record.
    ///
    /// Unrecognised MBTI types and love languages are skipped with a warning
    /// rather than failing the whole record.
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
            compatibility_score: decode_score(record)?,
            interests: record.field_or_default(field::INTERESTS)?,
            is_online: record.field_or_default(field::IS_ONLINE)?,
        })
    }
}

/// Reads `mbti_type`, skipping unknown values with a warning.
pub(crate) fn decode_mbti(record: &Record) -> Option<MbtiType> {
    let raw = record.str_field(field::MBTI_TYPE)?;
    match raw.trim().parse() {
        Ok(mbti) => Some(mbti),
        Err(_) => {
            tracing::warn!(record_id = record.id, mbti = raw, "unknown MBTI type");
            None
        }
    }
}

/// Reads `love_languages`, stored either as an array or as one
/// comma-separated string. Unknown entries are skipped with a warning.
pub(crate) fn decode_love_languages(record: &Record) -> Result<Vec<LoveLanguage>> {
    let raw: Vec<String> = match record.fields.get(field::LOVE_LANGUAGES) {
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => record.field_or_default(field::LOVE_LANGUAGES)?,
    };

    Ok(raw
        .iter()
        .filter_map(|entry| match entry.parse() {
            Ok(language) => Some(language),
            Err(_) => {
                tracing::warn!(record_id = record.id, language = %entry, "unknown love language");
                None
            }
        })
        .collect())
}

/// Reads `compatibility_score`, rounded and clamped to `0..=100`.
pub(crate) fn decode_score(record: &Record) -> Result<u8> {
    let score: f64 = record.field_or_default(field::COMPATIBILITY_SCORE)?;
    Ok(score.round().clamp(0.0, 100.0) as u8)
}
