//! Wiring of configuration, record storage and use cases for one invocation.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use kindred_application::{
    DiscoverUseCase, MatchesUseCase, ProfileSetupUseCase, SimulationUseCase,
};
use kindred_core::config::AppConfig;
use kindred_core::conversation::SequenceEngine;
use kindred_core::notification::NotificationSink;
use kindred_core::prompt::PromptCatalog;
use kindred_infrastructure::{
    ConfigService, KindredPaths, TracingNotificationSink, build_record_service,
};

pub struct AppContext {
    pub settings: ConfigService,
    pub config: AppConfig,
    pub paths: KindredPaths,
    pub catalog: PromptCatalog,
}

impl AppContext {
    pub fn load(base_dir: Option<&Path>) -> Result<Self> {
        let settings = ConfigService::new(KindredPaths::new(base_dir));
        Ok(Self {
            config: settings.get_config()?,
            paths: settings.data_paths()?,
            catalog: PromptCatalog::builtin(),
            settings,
        })
    }

    fn notifier(&self) -> Arc<dyn NotificationSink> {
        Arc::new(TracingNotificationSink)
    }

    pub fn simulation(&self) -> Result<SimulationUseCase> {
        let records = build_record_service(&self.config, &self.paths)?;
        Ok(SimulationUseCase::new(
            records,
            self.notifier(),
            SequenceEngine::new(self.catalog.clone()),
        )
        .with_participants(self.config.participants.clone()))
    }

    pub fn discover(&self) -> Result<DiscoverUseCase> {
        let records = build_record_service(&self.config, &self.paths)?;
        Ok(DiscoverUseCase::new(records, self.notifier()))
    }

    pub fn matches(&self) -> Result<MatchesUseCase> {
        let records = build_record_service(&self.config, &self.paths)?;
        Ok(MatchesUseCase::new(records, self.notifier()))
    }

    pub fn profile_setup(&self) -> Result<ProfileSetupUseCase> {
        let records = build_record_service(&self.config, &self.paths)?;
        Ok(ProfileSetupUseCase::new(records, self.notifier()))
    }
}
