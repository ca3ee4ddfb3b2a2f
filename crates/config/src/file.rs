use std::path::Path;

use error_stack::{Result, ResultExt};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE_TEXT: &str = r#"

# [general]
# log_timestamp = true

[store]
# url = "https://example.supabase.co"
# key = "anon-key"
table = "valentine_profiles"
request_timeout_seconds = 10

"#;

#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("Load config file")]
    LoadConfig,
    #[error("Parse config file")]
    ParseConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfigFile,
}

impl ConfigFile {
    pub fn load(file: impl AsRef<Path>) -> Result<ConfigFile, ConfigFileError> {
        let config_string = std::fs::read_to_string(file.as_ref())
            .change_context(ConfigFileError::LoadConfig)
            .attach_printable_lazy(|| file.as_ref().display().to_string())?;
        Self::parse(&config_string)
    }

    pub fn parse(text: &str) -> Result<ConfigFile, ConfigFileError> {
        toml::from_str(text).change_context(ConfigFileError::ParseConfig)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Write timestamp to log messages. Enabled by default.
    pub log_timestamp: Option<bool>,
}

impl GeneralConfig {
    pub fn log_timestamp(&self) -> bool {
        self.log_timestamp.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfigFile {
    pub url: Option<String>,
    pub key: Option<String>,
    pub table: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}
