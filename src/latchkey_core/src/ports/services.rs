use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::{Password, PasswordHash},
    session::{IssuedSession, SessionClaims},
    username::Username,
};

// CredentialHasher port trait and errors
#[derive(Debug, Error)]
pub enum CredentialHashError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// Slow, salted, one-way password hashing.
///
/// `verify` must compare in constant time.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<PasswordHash, CredentialHashError>;
    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), CredentialHashError>;

    /// A hash with the same cost as real ones, verified against when the
    /// username is unknown so both failures take the same time.
    fn decoy_hash(&self) -> &PasswordHash;
}

// SessionIssuer port trait and errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,
    #[error("Malformed token")]
    Malformed,
    #[error("Token signature mismatch")]
    SignatureMismatch,
    #[error("Token expired")]
    Expired,
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Mints and verifies self-contained, time-bounded session tokens.
///
/// There is no server-side session table: a token stays valid until its
/// expiry even after the client logs out.
pub trait SessionIssuer: Send + Sync {
    fn mint(&self, subject: &Username) -> Result<IssuedSession, SessionError>;
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError>;
}
