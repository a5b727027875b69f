//! Profile setup use case: the current user's profile and its creation.

use chrono::Utc;
use kindred_core::error::{KindredError, Result};
use kindred_core::notification::NotificationSink;
use kindred_core::record::{Record, RecordKind, RecordService};
use kindred_core::user::{ProfileDraft, UserProfile, field};
use std::sync::Arc;

pub struct ProfileSetupUseCase {
    records: Arc<dyn RecordService>,
    notifier: Arc<dyn NotificationSink>,
}

impl ProfileSetupUseCase {
    pub fn new(records: Arc<dyn RecordService>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { records, notifier }
    }

    /// The first active user profile, if one has been created.
    pub async fn current_user(&self) -> Result<Option<UserProfile>> {
        let records = self.records.get_all(RecordKind::User).await?;
        records
            .iter()
            .find(|r| is_active(r))
            .map(UserProfile::from_record)
            .transpose()
    }

    /// Validates `draft` and stores it as the active user profile.
    ///
    /// Nothing is written when the draft is invalid or an active profile
    /// already exists; both fail with `InvalidProfile` and no notification.
    /// A failed write notifies "Failed to create profile".
    pub async fn create_profile(&self, draft: &ProfileDraft) -> Result<UserProfile> {
        let fields = draft.creation_fields(Utc::now())?;

        if let Some(existing) = self.current_user().await? {
            return Err(KindredError::invalid_profile(format!(
                "an active profile already exists ({})",
                existing.id
            )));
        }

        let record = match self.records.create(RecordKind::User, fields).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "failed to create user profile");
                self.notifier.error("Failed to create profile");
                return Err(e);
            }
        };

        let profile = UserProfile::from_record(&record)?;
        tracing::info!(user_id = profile.id, name = %profile.name, "created user profile");
        self.notifier.success("Profile created successfully!");
        Ok(profile)
    }
}

fn is_active(record: &Record) -> bool {
    record
        .field::<bool>(field::IS_ACTIVE)
        .ok()
        .flatten()
        .unwrap_or(false)
}
