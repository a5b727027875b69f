mod common;

use common::{RecordingSink, UnreachableRecordService};
use kindred_application::MatchesUseCase;
use kindred_core::notification::NotificationKind;
use kindred_core::profile::{LoveLanguage, MbtiType};
use kindred_core::record::{Fields, RecordKind};
use kindred_infrastructure::InMemoryRecordService;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_list_mock_matches() {
    let sink = Arc::new(RecordingSink::default());
    let usecase = MatchesUseCase::new(
        Arc::new(InMemoryRecordService::with_mock_data()),
        sink.clone(),
    );

    let matches = usecase.list().await.unwrap();

    let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Emma", "Maya", "James"]);
    assert_eq!(
        matches[0].love_languages,
        vec![LoveLanguage::QualityTime, LoveLanguage::WordsOfAffirmation]
    );
    assert!(sink.all().is_empty());
}

#[tokio::test]
async fn test_empty_table_is_not_an_error() {
    let sink = Arc::new(RecordingSink::default());
    let usecase = MatchesUseCase::new(Arc::new(InMemoryRecordService::new()), sink.clone());

    assert!(usecase.list().await.unwrap().is_empty());
    assert!(sink.all().is_empty());
}

#[tokio::test]
async fn test_get_by_id() {
    let mut fields = Fields::new();
    fields.insert("Name".into(), json!("Ren"));
    fields.insert("mbti_type".into(), json!("ISFP"));
    fields.insert("compatibility_score".into(), json!(73));
    let records = InMemoryRecordService::with_records(RecordKind::Match, vec![fields]);
    let usecase = MatchesUseCase::new(Arc::new(records), Arc::new(RecordingSink::default()));

    let m = usecase.get(1).await.unwrap();
    assert_eq!(m.name, "Ren");
    assert_eq!(m.mbti_type, Some(MbtiType::Isfp));
    assert_eq!(m.compatibility_score, 73);

    assert!(usecase.get(2).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_load_failure_notifies() {
    let sink = Arc::new(RecordingSink::default());
    let usecase = MatchesUseCase::new(Arc::new(UnreachableRecordService), sink.clone());

    let err = usecase.list().await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(
        sink.messages(NotificationKind::Error),
        vec!["Failed to load matches"]
    );
}
