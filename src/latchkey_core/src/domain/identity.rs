use std::fmt;

use super::{password::PasswordHash, username::Username};

/// Store-assigned identifier of an identity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(i64);

impl IdentityId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional ways to reach the person behind an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: Option<String>,
    pub tel: Option<String>,
}

/// An identity that has not been written yet. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub contact: ContactDetails,
}

impl NewIdentity {
    pub fn new(username: Username, password_hash: PasswordHash, contact: ContactDetails) -> Self {
        Self {
            username,
            password_hash,
            contact,
        }
    }
}

/// A persisted identity as returned by a [`CredentialStore`](crate::CredentialStore).
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    id: IdentityId,
    username: Username,
    password_hash: PasswordHash,
    contact: ContactDetails,
}

impl IdentityRecord {
    pub fn new(
        id: IdentityId,
        username: Username,
        password_hash: PasswordHash,
        contact: ContactDetails,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            contact,
        }
    }

    pub fn id(&self) -> IdentityId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }
}
