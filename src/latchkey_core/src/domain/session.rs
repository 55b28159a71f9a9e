use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
///
/// `exp` is always `iat` plus the issuer's fixed TTL, both in seconds since
/// the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// A freshly minted token together with the claims it encodes.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub claims: SessionClaims,
}
