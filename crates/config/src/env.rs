//! Config given as environment variables

use tracing::{info, warn};

pub const STORE_URL_ENV: &str = "SUPABASE_URL";
pub const STORE_KEY_ENV: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    pub store_url: Option<String>,
    pub store_key: Option<String>,
}

impl EnvVars {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values are handled like missing values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            store_url: var(&lookup, STORE_URL_ENV),
            store_key: var(&lookup, STORE_KEY_ENV),
        }
    }
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Some(_) => {
            warn!("Environment variable {key} is empty");
            None
        }
        None => {
            info!("Environment variable {key} not set");
            None
        }
    }
}
