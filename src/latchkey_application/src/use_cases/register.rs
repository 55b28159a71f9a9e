use latchkey_core::{
    ContactDetails, CredentialHashError, CredentialHasher, CredentialStore, CredentialStoreError,
    NewIdentity, Password, Username,
};

/// Error types for the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
    #[error("Hashing error: {0}")]
    HashingError(#[from] CredentialHashError),
}

/// Register use case - hashes the password and writes a new identity
pub struct RegisterUseCase<'a, S, H>
where
    S: CredentialStore,
    H: CredentialHasher,
{
    credential_store: &'a S,
    hasher: &'a H,
}

impl<'a, S, H> RegisterUseCase<'a, S, H>
where
    S: CredentialStore,
    H: CredentialHasher,
{
    pub fn new(credential_store: &'a S, hasher: &'a H) -> Self {
        Self {
            credential_store,
            hasher,
        }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// Ok(()) once the identity is stored. A taken username yields
    /// `CredentialStoreError::AlreadyExists` and leaves the stored record untouched.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password, contact))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
        contact: ContactDetails,
    ) -> Result<(), RegisterError> {
        let password_hash = self.hasher.hash(password).await?;

        self.credential_store
            .create_identity(NewIdentity::new(username, password_hash, contact))
            .await?;

        tracing::info!("Identity registered");
        Ok(())
    }
}
