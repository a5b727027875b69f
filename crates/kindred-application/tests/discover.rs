mod common;

use common::{RecordingSink, UnreachableRecordService};
use kindred_application::DiscoverUseCase;
use kindred_core::notification::NotificationKind;
use kindred_core::profile::{LoveLanguage, MbtiType, ProfileFilter};
use kindred_infrastructure::InMemoryRecordService;
use std::sync::Arc;

fn mock_discover(sink: Arc<RecordingSink>) -> DiscoverUseCase {
    DiscoverUseCase::new(Arc::new(InMemoryRecordService::with_mock_data()), sink)
}

fn names(profiles: &[kindred_core::profile::Profile]) -> Vec<&str> {
    profiles.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_default_filter_returns_everyone() {
    let discover = mock_discover(Arc::new(RecordingSink::default()));
    let profiles = discover.discover(&ProfileFilter::default()).await.unwrap();
    assert_eq!(
        names(&profiles),
        vec!["Emma", "James", "Sofia", "Liam", "Maya", "Noah"]
    );
}

#[tokio::test]
async fn test_filter_by_mbti() {
    let discover = mock_discover(Arc::new(RecordingSink::default()));
    let filter = ProfileFilter::new().with_mbti_types([MbtiType::Infj, MbtiType::Entp]);
    let profiles = discover.discover(&filter).await.unwrap();
    assert_eq!(names(&profiles), vec!["Emma", "Noah"]);
}

#[tokio::test]
async fn test_filter_by_love_language_and_score() {
    let discover = mock_discover(Arc::new(RecordingSink::default()));

    let filter = ProfileFilter::new().with_love_languages([LoveLanguage::QualityTime]);
    let profiles = discover.discover(&filter).await.unwrap();
    assert_eq!(names(&profiles), vec!["Emma", "James", "Noah"]);

    let filter = filter.with_compatibility(80, 100).unwrap();
    let profiles = discover.discover(&filter).await.unwrap();
    assert_eq!(names(&profiles), vec!["Emma", "James"]);
}

#[tokio::test]
async fn test_profile_lookup() {
    let discover = mock_discover(Arc::new(RecordingSink::default()));

    let profile = discover.profile(5).await.unwrap();
    assert_eq!(profile.name, "Maya");
    assert_eq!(profile.mbti_type, Some(MbtiType::Esfj));

    let err = discover.profile(99).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_load_failure_notifies() {
    let sink = Arc::new(RecordingSink::default());
    let discover = DiscoverUseCase::new(Arc::new(UnreachableRecordService), sink.clone());

    let err = discover.discover(&ProfileFilter::default()).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(
        sink.messages(NotificationKind::Error),
        vec!["Failed to load profiles"]
    );
}
