#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod args;
pub mod env;
pub mod file;

use std::time::Duration;

use args::ArgsConfig;
use env::EnvVars;
use error_stack::{Result, ResultExt};
use file::ConfigFile;
use tracing::warn;
use url::Url;
use utils::ContextExt;

pub use self::file::ConfigFileError;

pub const DEFAULT_TABLE: &str = "valentine_profiles";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

#[derive(thiserror::Error, Debug)]
pub enum GetConfigError {
    #[error("File loading failed")]
    LoadFileError,
    #[error("Invalid configuration")]
    InvalidConfiguration,
}

/// Hosted database connection settings.
///
/// Missing URL or key is not an error. The store client is then created
/// in non-functional state where every insert fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: Option<Url>,
    pub access_key: Option<String>,
    pub table: String,
    pub request_timeout: Duration,
}

impl StoreConfig {
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.access_key.is_some()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            access_key: None,
            table: DEFAULT_TABLE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    store: StoreConfig,
    dry_run: bool,
}

impl Config {
    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    /// Profiles are kept in memory instead of the hosted database.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Merge config sources. Priority from highest to lowest is command
    /// line arguments, environment variables, config file and defaults.
    pub fn from_sources(
        args: &ArgsConfig,
        env: EnvVars,
        file: ConfigFile,
    ) -> Result<Config, GetConfigError> {
        let url = args
            .store_url
            .clone()
            .or(env.store_url)
            .or(file.store.url)
            .and_then(|url| parse_store_url(&url));

        let access_key = args
            .store_key
            .clone()
            .or(env.store_key)
            .or(file.store.key)
            .filter(|key| !key.trim().is_empty());

        let table = args
            .table
            .clone()
            .or(file.store.table)
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());
        if table.trim().is_empty() {
            return Err(GetConfigError::InvalidConfiguration.report())
                .attach_printable("Table name is empty");
        }

        let timeout_seconds = file
            .store
            .request_timeout_seconds
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS);
        if timeout_seconds == 0 {
            return Err(GetConfigError::InvalidConfiguration.report())
                .attach_printable("Request timeout must be at least one second");
        }

        Ok(Config {
            store: StoreConfig {
                url,
                access_key,
                table,
                request_timeout: Duration::from_secs(timeout_seconds),
            },
            dry_run: args.dry_run,
        })
    }
}

fn parse_store_url(url: &str) -> Option<Url> {
    match Url::parse(url.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("Invalid store URL {url}: {e}");
            None
        }
    }
}

/// Load only the config file. Logging settings are read from it before
/// [get_config] is called.
pub fn load_config_file(args: &ArgsConfig) -> Result<ConfigFile, GetConfigError> {
    match &args.config {
        Some(path) => ConfigFile::load(path).change_context(GetConfigError::LoadFileError),
        None => Ok(ConfigFile::default()),
    }
}

pub fn get_config(args: &ArgsConfig, file: ConfigFile) -> Result<Config, GetConfigError> {
    Config::from_sources(args, EnvVars::from_env(), file)
}
