//! Matches list use case.

use kindred_core::error::Result;
use kindred_core::matches::Match;
use kindred_core::notification::NotificationSink;
use kindred_core::record::{RecordId, RecordKind, RecordService};
use std::sync::Arc;

pub struct MatchesUseCase {
    records: Arc<dyn RecordService>,
    notifier: Arc<dyn NotificationSink>,
}

impl MatchesUseCase {
    pub fn new(records: Arc<dyn RecordService>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { records, notifier }
    }

    /// Every match in stored order.
    pub async fn list(&self) -> Result<Vec<Match>> {
        match self.load_all().await {
            Ok(matches) => {
                tracing::debug!(count = matches.len(), "loaded matches");
                Ok(matches)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load matches");
                self.notifier.error("Failed to load matches");
                Err(e)
            }
        }
    }

    pub async fn get(&self, id: RecordId) -> Result<Match> {
        let record = self.records.get_by_id(RecordKind::Match, id).await?;
        Match::from_record(&record)
    }

    async fn load_all(&self) -> Result<Vec<Match>> {
        self.records
            .get_all(RecordKind::Match)
            .await?
            .iter()
            .map(Match::from_record)
            .collect()
    }
}
