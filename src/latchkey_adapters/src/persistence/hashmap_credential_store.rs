use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use latchkey_core::{
    CredentialStore, CredentialStoreError, IdentityId, IdentityRecord, NewIdentity, Username,
};

/// In-memory credential store for tests and local runs.
///
/// Ids are assigned from a counter starting at 1. The write lock held
/// during `create_identity` makes the uniqueness check atomic.
#[derive(Default, Clone)]
pub struct HashMapCredentialStore {
    identities: Arc<RwLock<HashMap<Username, IdentityRecord>>>,
    last_id: Arc<AtomicI64>,
}

impl HashMapCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.identities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.identities.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CredentialStore for HashMapCredentialStore {
    async fn create_identity(&self, identity: NewIdentity) -> Result<(), CredentialStoreError> {
        let mut identities = self.identities.write().await;
        if identities.contains_key(&identity.username) {
            return Err(CredentialStoreError::AlreadyExists);
        }

        let id = IdentityId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let record = IdentityRecord::new(
            id,
            identity.username.clone(),
            identity.password_hash,
            identity.contact,
        );
        identities.insert(identity.username, record);
        Ok(())
    }

    async fn lookup_identity(
        &self,
        username: &Username,
    ) -> Result<IdentityRecord, CredentialStoreError> {
        let identities = self.identities.read().await;
        identities
            .get(username)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }
}
