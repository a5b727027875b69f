//! Mock dataset for the in-memory backend.

use kindred_core::matches::field as match_field;
use kindred_core::profile::field;
use kindred_core::record::Fields;
use serde_json::json;

struct MockProfile {
    name: &'static str,
    age: u32,
    location: &'static str,
    bio: &'static str,
    mbti: &'static str,
    love_languages: &'static [&'static str],
    score: u8,
    interests: &'static [&'static str],
    online: bool,
}

const PROFILES: &[MockProfile] = &[
    MockProfile {
        name: "Emma",
        age: 28,
        location: "San Francisco, CA",
        bio: "Bookworm who loves hiking on weekends and trying new recipes.",
        mbti: "INFJ",
        love_languages: &["Quality Time", "Words of Affirmation"],
        score: 92,
        interests: &["Reading", "Hiking", "Cooking"],
        online: true,
    },
    MockProfile {
        name: "James",
        age: 31,
        location: "Austin, TX",
        bio: "Musician by night, software engineer by day.",
        mbti: "ENFP",
        love_languages: &["Physical Touch", "Quality Time"],
        score: 87,
        interests: &["Music", "Travel", "Coffee"],
        online: false,
    },
    MockProfile {
        name: "Sofia",
        age: 26,
        location: "Chicago, IL",
        bio: "Architect who sketches strangers on the train.",
        mbti: "INTJ",
        love_languages: &["Acts of Service"],
        score: 78,
        interests: &["Design", "Art", "Running"],
        online: true,
    },
    MockProfile {
        name: "Liam",
        age: 33,
        location: "Seattle, WA",
        bio: "Weekend sailor and amateur astronomer.",
        mbti: "ISTP",
        love_languages: &["Receiving Gifts", "Acts of Service"],
        score: 65,
        interests: &["Sailing", "Astronomy"],
        online: false,
    },
    MockProfile {
        name: "Maya",
        age: 29,
        location: "Denver, CO",
        bio: "Yoga teacher looking for someone to share sunrises with.",
        mbti: "ESFJ",
        love_languages: &["Words of Affirmation", "Physical Touch"],
        score: 84,
        interests: &["Yoga", "Mountains", "Gardening"],
        online: true,
    },
    MockProfile {
        name: "Noah",
        age: 35,
        location: "Portland, OR",
        bio: "Chef who believes every argument can be solved with pasta.",
        mbti: "ENTP",
        love_languages: &["Acts of Service", "Quality Time"],
        score: 71,
        interests: &["Cooking", "Debate", "Cycling"],
        online: false,
    },
];

/// Rows for the `profile` table.
pub fn profiles() -> Vec<Fields> {
    PROFILES
        .iter()
        .map(|p| {
            let mut fields = Fields::new();
            fields.insert(field::NAME.into(), json!(p.name));
            fields.insert(field::AGE.into(), json!(p.age));
            fields.insert(field::LOCATION.into(), json!(p.location));
            fields.insert(field::BIO.into(), json!(p.bio));
            fields.insert(field::MBTI_TYPE.into(), json!(p.mbti));
            fields.insert(field::LOVE_LANGUAGES.into(), json!(p.love_languages));
            fields.insert(field::COMPATIBILITY_SCORE.into(), json!(p.score));
            fields.insert(field::INTERESTS.into(), json!(p.interests));
            fields.insert(field::IS_ONLINE.into(), json!(p.online));
            fields
        })
        .collect()
}

struct MockMatch {
    name: &'static str,
    age: u32,
    location: &'static str,
    mbti: &'static str,
    /// Stored joined, the way the matches table keeps them.
    love_languages: &'static str,
    score: u8,
    matched_on: &'static str,
    last_message: &'static str,
    online: bool,
}

const MATCHES: &[MockMatch] = &[
    MockMatch {
        name: "Emma",
        age: 28,
        location: "San Francisco, CA",
        mbti: "INFJ",
        love_languages: "Quality Time,Words of Affirmation",
        score: 92,
        matched_on: "2025-01-12",
        last_message: "That trail looks amazing, let's go next weekend!",
        online: true,
    },
    MockMatch {
        name: "Maya",
        age: 29,
        location: "Denver, CO",
        mbti: "ESFJ",
        love_languages: "Words of Affirmation,Physical Touch",
        score: 84,
        matched_on: "2025-01-20",
        last_message: "Sunrise yoga tomorrow?",
        online: true,
    },
    MockMatch {
        name: "James",
        age: 31,
        location: "Austin, TX",
        mbti: "ENFP",
        love_languages: "Physical Touch,Quality Time",
        score: 87,
        matched_on: "2025-02-03",
        last_message: "",
        online: false,
    },
];

/// Rows for the `match` table.
pub fn matches() -> Vec<Fields> {
    MATCHES
        .iter()
        .map(|m| {
            let mut fields = Fields::new();
            fields.insert(match_field::NAME.into(), json!(m.name));
            fields.insert(match_field::AGE.into(), json!(m.age));
            fields.insert(match_field::LOCATION.into(), json!(m.location));
            fields.insert(match_field::MBTI_TYPE.into(), json!(m.mbti));
            fields.insert(match_field::LOVE_LANGUAGES.into(), json!(m.love_languages));
            fields.insert(match_field::COMPATIBILITY_SCORE.into(), json!(m.score));
            fields.insert(match_field::MATCHED_ON.into(), json!(m.matched_on));
            fields.insert(match_field::LAST_MESSAGE.into(), json!(m.last_message));
            fields.insert(match_field::IS_ONLINE.into(), json!(m.online));
            fields
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::matches::Match;
    use kindred_core::profile::Profile;
    use kindred_core::record::Record;

    #[test]
    fn test_mock_profiles_decode_cleanly() {
        for (index, fields) in profiles().into_iter().enumerate() {
            let profile = Profile::from_record(&Record::new(index as u64 + 1, fields)).unwrap();
            assert!(profile.mbti_type.is_some(), "{} has no MBTI", profile.name);
            assert!(!profile.love_languages.is_empty());
        }
    }

    #[test]
    fn test_mock_matches_decode_cleanly() {
        let decoded: Vec<Match> = matches()
            .into_iter()
            .enumerate()
            .map(|(index, fields)| {
                Match::from_record(&Record::new(index as u64 + 1, fields)).unwrap()
            })
            .collect();

        assert_eq!(decoded.len(), 3);
        assert!(decoded.iter().all(|m| m.love_languages.len() == 2));
        assert!(decoded.iter().all(|m| m.matched_on.is_some()));
        assert_eq!(decoded[2].last_message, None);
    }
}
