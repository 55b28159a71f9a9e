use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    identity::{IdentityRecord, NewIdentity},
    username::Username,
};

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Identity already exists")]
    AlreadyExists,
    #[error("Identity not found")]
    NotFound,
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AlreadyExists, Self::AlreadyExists)
                | (Self::NotFound, Self::NotFound)
                | (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::StorageFailure(_), Self::StorageFailure(_))
        )
    }
}

/// Durable create/lookup of identity records.
///
/// Implementations never see plaintext passwords: callers hash before
/// calling [`create_identity`](CredentialStore::create_identity).
/// Username uniqueness is enforced by the backend at write time.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn create_identity(&self, identity: NewIdentity) -> Result<(), CredentialStoreError>;
    async fn lookup_identity(
        &self,
        username: &Username,
    ) -> Result<IdentityRecord, CredentialStoreError>;
}
