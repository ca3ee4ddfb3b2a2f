use async_trait::async_trait;
use error_stack::Result;
use model::Profile;
use tokio::sync::Mutex;
use tracing::info;

use crate::{ProfileStore, StoreError};

/// Keeps inserted profiles in RAM.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<Vec<Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn profiles(&self) -> Vec<Profile> {
        self.profiles.lock().await.clone()
    }

    pub async fn profile_count(&self) -> usize {
        self.profiles.lock().await.len()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn insert(&self, profile: &Profile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.lock().await;
        profiles.push(profile.clone());
        info!("Profile stored in memory, profile count: {}", profiles.len());
        Ok(())
    }
}
