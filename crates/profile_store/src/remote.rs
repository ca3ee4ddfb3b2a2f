//! Hosted database table as profile store.
//!
//! Profiles are inserted with one REST request per profile:
//!
//! ```text
//! POST {url}/rest/v1/{table}
//! apikey: {key}
//! Authorization: Bearer {key}
//! Prefer: return=minimal
//!
//! [{"name": "Ada", "age": 29, ...}]
//! ```
//!
//! Any 2xx status is success. The response body is not read on success.

use api_client::{
    apis::{
        Error as ApiError,
        configuration::Configuration,
        valentine_profiles_api::{PostValentineProfilesError, post_valentine_profiles},
    },
    manual_additions::configuration_with_access_key,
    models::{self, ValentineProfile},
};
use async_trait::async_trait;
use config::StoreConfig;
use error_stack::{Report, Result, ResultExt};
use model::{Gender, Profile};
use tracing::{debug, warn};
use utils::ContextExt;

use crate::{ProfileStore, StoreError};

const PREFER_MINIMAL_RETURN: &str = "return=minimal";

enum RemoteState {
    Configured(Configuration),
    NotConfigured,
}

pub struct RemoteProfileStore {
    state: RemoteState,
    table: String,
}

impl RemoteProfileStore {
    /// Missing URL or access key creates a store where every insert
    /// fails with [StoreError::NotConfigured].
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let (Some(url), Some(access_key)) = (&config.url, &config.access_key) else {
            warn!("Profile store URL or access key is missing, profile inserts will fail");
            return Ok(Self::not_configured(config.table.clone()));
        };

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .change_context(StoreError::ClientCreation)?;

        Ok(Self {
            state: RemoteState::Configured(configuration_with_access_key(
                url.as_str(),
                access_key,
                client,
            )),
            table: config.table.clone(),
        })
    }

    pub fn not_configured(table: String) -> Self {
        Self {
            state: RemoteState::NotConfigured,
            table,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, RemoteState::Configured(_))
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl ProfileStore for RemoteProfileStore {
    async fn insert(&self, profile: &Profile) -> Result<(), StoreError> {
        let configuration = match &self.state {
            RemoteState::Configured(configuration) => configuration,
            RemoteState::NotConfigured => return Err(StoreError::NotConfigured.report()),
        };

        debug!("Inserting profile to table {}", self.table);

        post_valentine_profiles(
            configuration,
            &self.table,
            vec![profile_row(profile)],
            Some(PREFER_MINIMAL_RETURN),
        )
        .await
        .map_err(api_error_to_report)
    }
}

fn api_error_to_report(e: ApiError<PostValentineProfilesError>) -> Report<StoreError> {
    let (context, details) = match &e {
        ApiError::ResponseError(response) => {
            let details = match &response.entity {
                Some(entity) => entity.to_string(),
                None => response.content.clone(),
            };
            (StoreError::Rejected(response.status.as_u16()), details)
        }
        ApiError::Reqwest(reqwest_error) if reqwest_error.is_decode() => {
            (StoreError::InvalidResponse, e.to_string())
        }
        ApiError::Serde(_) => (StoreError::InvalidResponse, e.to_string()),
        ApiError::Reqwest(_) | ApiError::Io(_) => (StoreError::Request, e.to_string()),
    };

    Report::new(e)
        .change_context(context)
        .attach_printable(details)
}

fn profile_row(profile: &Profile) -> ValentineProfile {
    let gender = match profile.gender() {
        Gender::Male => models::Gender::Male,
        Gender::Female => models::Gender::Female,
        Gender::NonBinary => models::Gender::NonBinary,
        Gender::Other => models::Gender::Other,
    };

    ValentineProfile {
        ideal_date: profile.ideal_date().map(ToString::to_string),
        deal_breakers: profile.deal_breakers().map(ToString::to_string),
        ..ValentineProfile::new(
            profile.name().to_string(),
            profile.age().into(),
            gender,
            profile.email().to_string(),
            profile.interests().to_string(),
            profile.looking_for().to_string(),
        )
    }
}
