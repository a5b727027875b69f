pub mod config_service;
pub mod in_memory_record_service;
pub mod mock_data;
pub mod notification_sink;
pub mod paths;
pub mod record_service_factory;
pub mod storage;
pub mod toml_record_service;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_record_service::InMemoryRecordService;
pub use crate::notification_sink::{ChannelNotificationSink, TracingNotificationSink};
pub use crate::paths::KindredPaths;
pub use crate::record_service_factory::build_record_service;
pub use crate::toml_record_service::TomlRecordService;
