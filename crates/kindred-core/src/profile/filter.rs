//! Discovery filter for profiles.

use super::model::{LoveLanguage, MbtiType, Profile};
use crate::error::{KindredError, Result};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Criteria selected in the discovery sidebar.
///
/// An empty set means "any". A profile passes when every non-empty
/// criterion matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFilter {
    mbti_types: BTreeSet<MbtiType>,
    love_languages: BTreeSet<LoveLanguage>,
    compatibility: RangeInclusive<u8>,
}

impl Default for ProfileFilter {
    fn default() -> Self {
        Self {
            mbti_types: BTreeSet::new(),
            love_languages: BTreeSet::new(),
            compatibility: 0..=100,
        }
    }
}

impl ProfileFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mbti_types(mut self, types: impl IntoIterator<Item = MbtiType>) -> Self {
        self.mbti_types.extend(types);
        self
    }

    pub fn with_love_languages(mut self, languages: impl IntoIterator<Item = LoveLanguage>) -> Self {
        self.love_languages.extend(languages);
        self
    }

    /// Restricts the compatibility score to `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns `KindredError::Config` if `min > max` or `max > 100`.
    pub fn with_compatibility(mut self, min: u8, max: u8) -> Result<Self> {
        if min > max || max > 100 {
            return Err(KindredError::config(format!(
                "invalid compatibility range {}..={}",
                min, max
            )));
        }
        self.compatibility = min..=max;
        Ok(self)
    }

    /// Adds the type if absent, removes it if present.
    pub fn toggle_mbti(&mut self, mbti: MbtiType) {
        if !self.mbti_types.remove(&mbti) {
            self.mbti_types.insert(mbti);
        }
    }

    /// Adds the language if absent, removes it if present.
    pub fn toggle_love_language(&mut self, language: LoveLanguage) {
        if !self.love_languages.remove(&language) {
            self.love_languages.insert(language);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mbti_types(&self) -> &BTreeSet<MbtiType> {
        &self.mbti_types
    }

    pub fn love_languages(&self) -> &BTreeSet<LoveLanguage> {
        &self.love_languages
    }

    pub fn compatibility(&self) -> &RangeInclusive<u8> {
        &self.compatibility
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        let mbti_ok = self.mbti_types.is_empty()
            || profile
                .mbti_type
                .is_some_and(|mbti| self.mbti_types.contains(&mbti));

        let language_ok = self.love_languages.is_empty()
            || profile
                .love_languages
                .iter()
                .any(|language| self.love_languages.contains(language));

        mbti_ok && language_ok && self.compatibility.contains(&profile.compatibility_score)
    }

    /// Keeps the matching profiles, preserving order.
    pub fn apply(&self, profiles: Vec<Profile>) -> Vec<Profile> {
        profiles.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: u64, mbti: Option<MbtiType>, languages: &[LoveLanguage], score: u8) -> Profile {
        Profile {
            id,
            name: format!("profile-{id}"),
            age: Some(30),
            location: "Somewhere".to_string(),
            photo: None,
            bio: String::new(),
            mbti_type: mbti,
            love_languages: languages.to_vec(),
            compatibility_score: score,
            interests: Vec::new(),
            is_online: false,
        }
    }

    fn sample() -> Vec<Profile> {
        vec![
            profile(1, Some(MbtiType::Enfp), &[LoveLanguage::QualityTime], 92),
            profile(2, Some(MbtiType::Intj), &[LoveLanguage::ActsOfService], 64),
            profile(3, None, &[LoveLanguage::PhysicalTouch, LoveLanguage::QualityTime], 78),
            profile(4, Some(MbtiType::Infj), &[], 40),
        ]
    }

    fn ids(profiles: &[Profile]) -> Vec<u64> {
        profiles.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filter_matches_everything() {
        assert_eq!(ids(&ProfileFilter::new().apply(sample())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_mbti_filter() {
        let filter = ProfileFilter::new().with_mbti_types([MbtiType::Enfp, MbtiType::Infj]);
        assert_eq!(ids(&filter.apply(sample())), vec![1, 4]);
    }

    #[test]
    fn test_love_language_filter_needs_one_shared_language() {
        let filter = ProfileFilter::new().with_love_languages([LoveLanguage::QualityTime]);
        assert_eq!(ids(&filter.apply(sample())), vec![1, 3]);
    }

    #[test]
    fn test_compatibility_range_is_inclusive() {
        let filter = ProfileFilter::new().with_compatibility(64, 78).unwrap();
        assert_eq!(ids(&filter.apply(sample())), vec![2, 3]);
    }

    #[test]
    fn test_criteria_combine() {
        let filter = ProfileFilter::new()
            .with_love_languages([LoveLanguage::QualityTime])
            .with_compatibility(80, 100)
            .unwrap();
        assert_eq!(ids(&filter.apply(sample())), vec![1]);
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        assert!(ProfileFilter::new().with_compatibility(90, 10).is_err());
        assert!(ProfileFilter::new().with_compatibility(0, 101).is_err());
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut filter = ProfileFilter::new();
        filter.toggle_mbti(MbtiType::Estp);
        filter.toggle_love_language(LoveLanguage::ReceivingGifts);
        assert!(filter.mbti_types().contains(&MbtiType::Estp));

        filter.toggle_mbti(MbtiType::Estp);
        assert!(filter.mbti_types().is_empty());
        assert_eq!(filter.love_languages().len(), 1);

        filter.reset();
        assert_eq!(filter, ProfileFilter::default());
    }
}
