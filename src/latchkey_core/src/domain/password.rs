use secrecy::{ExposeSecret, Secret};

use super::username::CredentialError;

/// Plaintext password as submitted by a client.
///
/// Wrapped in [`Secret`] so it never shows up in `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, CredentialError> {
        if raw.expose_secret().is_empty() {
            return Err(CredentialError::EmptyPassword);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = CredentialError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// One-way salted hash of a password, in PHC string format.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(phc: Secret<String>) -> Self {
        Self(phc)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
