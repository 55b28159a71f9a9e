use latchkey_core::{
    CredentialHashError, CredentialHasher, CredentialStore, CredentialStoreError, IssuedSession,
    Password, SessionError, SessionIssuer, Username,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown username or wrong password. The two are deliberately not
    /// distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Credential store error: {0}")]
    CredentialStoreError(CredentialStoreError),
    #[error("Hashing error: {0}")]
    HashingError(CredentialHashError),
    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),
}

impl From<CredentialStoreError> for LoginError {
    fn from(error: CredentialStoreError) -> Self {
        match error {
            CredentialStoreError::NotFound => LoginError::InvalidCredentials,
            e => LoginError::CredentialStoreError(e),
        }
    }
}

impl From<CredentialHashError> for LoginError {
    fn from(error: CredentialHashError) -> Self {
        match error {
            CredentialHashError::Mismatch => LoginError::InvalidCredentials,
            e => LoginError::HashingError(e),
        }
    }
}

/// Login use case - verifies credentials and mints a session token
pub struct LoginUseCase<'a, S, H, I>
where
    S: CredentialStore,
    H: CredentialHasher,
    I: SessionIssuer,
{
    credential_store: &'a S,
    hasher: &'a H,
    session_issuer: &'a I,
}

impl<'a, S, H, I> LoginUseCase<'a, S, H, I>
where
    S: CredentialStore,
    H: CredentialHasher,
    I: SessionIssuer,
{
    pub fn new(credential_store: &'a S, hasher: &'a H, session_issuer: &'a I) -> Self {
        Self {
            credential_store,
            hasher,
            session_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The minted session on success, `LoginError::InvalidCredentials` for an
    /// unknown username or a wrong password.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<IssuedSession, LoginError> {
        let identity = match self.credential_store.lookup_identity(&username).await {
            Ok(identity) => identity,
            Err(CredentialStoreError::NotFound) => {
                // Unknown usernames still pay for one verification
                let _ = self
                    .hasher
                    .verify(self.hasher.decoy_hash(), &password)
                    .await;
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        self.hasher
            .verify(identity.password_hash(), &password)
            .await?;

        let session = self.session_issuer.mint(identity.username())?;

        tracing::info!(identity_id = %identity.id(), "Session issued");
        Ok(session)
    }
}
