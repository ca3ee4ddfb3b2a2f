use std::fmt;

use crate::{
    apis::{
        configuration::{ApiKey, Configuration},
        valentine_profiles_api::PostValentineProfilesError,
    },
    models::PostgrestError,
};

impl fmt::Display for PostgrestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code)?,
            None => write!(f, "{}", self.message)?,
        }
        if let Some(details) = &self.details {
            write!(f, ", details: {}", details)?;
        }
        if let Some(hint) = &self.hint {
            write!(f, ", hint: {}", hint)?;
        }
        Ok(())
    }
}

impl fmt::Display for PostValentineProfilesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultResponse(e) => write!(f, "{}", e),
            Self::UnknownValue(v) => write!(f, "{}", v),
        }
    }
}

/// Hosted database expects the same key in the `apikey` header and as the
/// bearer token.
pub fn configuration_with_access_key(
    base_path: &str,
    access_key: &str,
    client: reqwest::Client,
) -> Configuration {
    Configuration {
        base_path: base_path.trim_end_matches('/').to_string(),
        client,
        api_key: Some(ApiKey {
            prefix: None,
            key: access_key.to_string(),
        }),
        bearer_access_token: Some(access_key.to_string()),
        ..Configuration::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::urlencode;

    #[test]
    fn configuration_trims_trailing_slash() {
        let config =
            configuration_with_access_key("https://db.example.com/", "key", reqwest::Client::new());
        assert_eq!(config.base_path, "https://db.example.com");
        assert_eq!(config.api_key.unwrap().key, "key");
        assert_eq!(config.bearer_access_token.as_deref(), Some("key"));
    }

    #[test]
    fn postgrest_error_display() {
        let e = PostgrestError {
            code: Some("23505".to_string()),
            details: None,
            hint: Some("check email".to_string()),
            message: "duplicate key".to_string(),
        };
        assert_eq!(e.to_string(), "duplicate key (code 23505), hint: check email");
    }

    #[test]
    fn table_name_is_url_encoded() {
        assert_eq!(urlencode("valentine_profiles"), "valentine_profiles");
        assert_eq!(urlencode("a/b"), "a%2Fb");
    }
}
