use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{
    ConfigManager, DisplayConfig, FileContentConfigProvider, SearchConfig, YamlConfigSerializer,
};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_THINK_DELAY_MS: u64 = 10_000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path_override: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub display: DisplayConfig,
    /// Pause before the computer answers, so its move is noticeable.
    #[serde(default = "default_think_delay_ms")]
    pub think_delay_ms: u64,
}

fn default_think_delay_ms() -> u64 {
    500
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.search.validate()?;
        self.display.validate()?;
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms must not exceed {}",
                MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            display: DisplayConfig::default(),
            think_delay_ms: default_think_delay_ms(),
        }
    }
}
