mod config;
mod display_config;
mod search_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{get_config_manager, Config};
pub use display_config::DisplayConfig;
pub use search_config::SearchConfig;
