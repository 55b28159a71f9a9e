use argon2::{
    Algorithm, Argon2, Params, PasswordHash as PhcHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use latchkey_core::{CredentialHashError, CredentialHasher, Password, PasswordHash};
use secrecy::{ExposeSecret, Secret};

/// Argon2id password hashing with a tunable cost.
///
/// Hashing and verification run on the blocking pool so a slow hash never
/// stalls the async workers.
#[derive(Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
    decoy: PasswordHash,
}

impl Argon2CredentialHasher {
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of passes
    /// * `parallelism` - Degree of parallelism
    pub fn new(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, CredentialHashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| CredentialHashError::Hashing(e.to_string()))?;

        let salt: SaltString = SaltString::generate(rand_core::OsRng);
        let decoy = Self::argon2(params.clone())
            .hash_password(b"latchkey-decoy", &salt)
            .map(|h| PasswordHash::new(Secret::from(h.to_string())))
            .map_err(|e| CredentialHashError::Hashing(e.to_string()))?;

        Ok(Self { params, decoy })
    }

    fn argon2(params: Params) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordHash, CredentialHashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                Self::argon2(params)
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| CredentialHashError::Hashing(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialHashError::Hashing(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), CredentialHashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();
        let expected = expected.clone();
        let candidate = candidate.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected: PhcHash<'_> = PhcHash::new(expected.as_ref().expose_secret())
                    .map_err(|e| CredentialHashError::Hashing(e.to_string()))?;

                // argon2 compares the digests in constant time
                Self::argon2(params)
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected)
                    .map_err(|e| match e {
                        password_hash::Error::Password => CredentialHashError::Mismatch,
                        other => CredentialHashError::Hashing(other.to_string()),
                    })
            })
        })
        .await
        .map_err(|e| CredentialHashError::Hashing(e.to_string()))?
    }

    fn decoy_hash(&self) -> &PasswordHash {
        &self.decoy
    }
}
