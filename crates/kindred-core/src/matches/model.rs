//! Match domain model.

use crate::error::Result;
use crate::profile::{LoveLanguage, MbtiType, decode_love_languages, decode_mbti, decode_score};
use crate::record::{Record, RecordId};
use chrono::{DateTime, NaiveDate};

/// Field names of the `match` table.
///
/// Shared profile columns use the same names as the `profile` table.
pub mod field {
    pub use crate::profile::field::{
        AGE, COMPATIBILITY_SCORE, IS_ONLINE, LOCATION, LOVE_LANGUAGES, MBTI_TYPE, NAME, PHOTO,
    };

    pub const MATCHED_ON: &str = "matched_on";
    pub const LAST_MESSAGE: &str = "last_message";
}

/// A mutual match shown on the matches view.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: RecordId,
    pub name: String,
    pub age: Option<u32>,
    pub location: String,
    pub photo: Option<String>,
    pub mbti_type: Option<MbtiType>,
    pub love_languages: Vec<LoveLanguage>,
    pub compatibility_score: u8,
    pub matched_on: Option<NaiveDate>,
    pub last_message: Option<String>,
    pub is_online: bool,
}

impl Match {
    /// Decodes a `match` record.
    ///
    /// `matched_on` may be a plain date or an RFC 3339 timestamp; anything
    /// else is dropped with a warning.
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.id,
            name: record.str_field(field::NAME).unwrap_or_default().to_string(),
            age: record.field(field::AGE)?,
            location: record.str_field(field::LOCATION).unwrap_or_default().to_string(),
            photo: record.field(field::PHOTO)?,
            mbti_type: decode_mbti(record),
            love_languages: decode_love_languages(record)?,
            compatibility_score: decode_score(record)?,
            matched_on: decode_matched_on(record),
            last_message: record
                .str_field(field::LAST_MESSAGE)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            is_online: record.field_or_default(field::IS_ONLINE)?,
        })
    }
}

fn decode_matched_on(record: &Record) -> Option<NaiveDate> {
    let raw = record.str_field(field::MATCHED_ON)?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => Some(at.date_naive()),
        Err(_) => {
            tracing::warn!(record_id = record.id, matched_on = raw, "unreadable match date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: RecordId, value: serde_json::Value) -> Record {
        Record::new(id, value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_from_record() {
        let record = record(
            4,
            json!({
                "Name": "Maya",
                "age": 27,
                "location": "Porto",
                "mbti_type": "enfj",
                "love_languages": "Quality Time,Words of Affirmation",
                "compatibility_score": 91.2,
                "matched_on": "2025-02-14",
                "last_message": "See you Saturday?",
                "is_online": true
            }),
        );

        let m = Match::from_record(&record).unwrap();

        assert_eq!(m.name, "Maya");
        assert_eq!(m.mbti_type, Some(MbtiType::Enfj));
        assert_eq!(
            m.love_languages,
            vec![LoveLanguage::QualityTime, LoveLanguage::WordsOfAffirmation]
        );
        assert_eq!(m.compatibility_score, 91);
        assert_eq!(m.matched_on, NaiveDate::from_ymd_opt(2025, 2, 14));
        assert_eq!(m.last_message.as_deref(), Some("See you Saturday?"));
        assert!(m.is_online);
    }

    #[test]
    fn test_matched_on_accepts_timestamps_and_skips_garbage() {
        let stamped = record(1, json!({"matched_on": "2025-03-01T18:30:00Z"}));
        let garbled = record(2, json!({"matched_on": "last tuesday", "last_message": "  "}));

        assert_eq!(
            Match::from_record(&stamped).unwrap().matched_on,
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        let m = Match::from_record(&garbled).unwrap();
        assert_eq!(m.matched_on, None);
        assert_eq!(m.last_message, None);
        assert_eq!(m.compatibility_score, 0);
    }
}
