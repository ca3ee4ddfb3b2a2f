#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! Insert-only persistence for submitted profiles.

pub mod memory;
pub mod remote;

use async_trait::async_trait;
use error_stack::Result;
use model::Profile;

pub use memory::InMemoryProfileStore;
pub use remote::RemoteProfileStore;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("Profile store is not configured")]
    NotConfigured,

    #[error("HTTP client creation failed")]
    ClientCreation,

    #[error("Sending insert request failed")]
    Request,

    #[error("Insert rejected with HTTP status {0}")]
    Rejected(u16),

    #[error("Invalid response from profile store")]
    InvalidResponse,
}

impl StoreError {
    /// Retrying the same insert later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request => true,
            Self::Rejected(status) => *status >= 500 || *status == 429,
            Self::NotConfigured | Self::ClientCreation | Self::InvalidResponse => false,
        }
    }
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert one profile. Every call makes at most one insert attempt.
    async fn insert(&self, profile: &Profile) -> Result<(), StoreError>;
}
