pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    identity::{ContactDetails, IdentityId, IdentityRecord, NewIdentity},
    password::{Password, PasswordHash},
    session::{IssuedSession, SessionClaims},
    username::{CredentialError, Username},
};

pub use ports::{
    repositories::{CredentialStore, CredentialStoreError},
    services::{CredentialHashError, CredentialHasher, SessionError, SessionIssuer},
};
