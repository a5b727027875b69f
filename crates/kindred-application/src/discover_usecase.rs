//! Profile discovery use case.

use kindred_core::error::Result;
use kindred_core::notification::NotificationSink;
use kindred_core::profile::{Profile, ProfileFilter};
use kindred_core::record::{RecordId, RecordKind, RecordService};
use std::sync::Arc;

pub struct DiscoverUseCase {
    records: Arc<dyn RecordService>,
    notifier: Arc<dyn NotificationSink>,
}

impl DiscoverUseCase {
    pub fn new(records: Arc<dyn RecordService>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { records, notifier }
    }

    /// Loads every profile and keeps those matching `filter`.
    pub async fn discover(&self, filter: &ProfileFilter) -> Result<Vec<Profile>> {
        let profiles = match self.load_all().await {
            Ok(profiles) => profiles,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load profiles");
                self.notifier.error("Failed to load profiles");
                return Err(e);
            }
        };

        let total = profiles.len();
        let matched = filter.apply(profiles);
        tracing::debug!(total, matched = matched.len(), "applied profile filter");
        Ok(matched)
    }

    pub async fn profile(&self, id: RecordId) -> Result<Profile> {
        let record = self.records.get_by_id(RecordKind::Profile, id).await?;
        Profile::from_record(&record)
    }

    async fn load_all(&self) -> Result<Vec<Profile>> {
        self.records
            .get_all(RecordKind::Profile)
            .await?
            .iter()
            .map(Profile::from_record)
            .collect()
    }
}
