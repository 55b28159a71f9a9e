use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use latchkey_core::{IssuedSession, SessionClaims, SessionError, SessionIssuer, Username};
use secrecy::{ExposeSecret, Secret};

/// Lifetime of a minted session token.
pub const SESSION_TTL_SECONDS: i64 = 300;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            jwt_secret,
            token_ttl_in_seconds: SESSION_TTL_SECONDS,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// HS256 session tokens signed with a shared secret.
///
/// Cheap to clone; the keys live behind an `Arc`.
#[derive(Clone)]
pub struct JwtSessionIssuer {
    config: Arc<JwtAuthConfig>,
    keys: Arc<Keys>,
}

impl JwtSessionIssuer {
    pub fn new(config: JwtAuthConfig) -> Result<Self, SessionError> {
        if config.jwt_secret.expose_secret().is_empty() {
            return Err(SessionError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let keys = Keys {
            encoding: EncodingKey::from_secret(config.as_bytes()),
            decoding: DecodingKey::from_secret(config.as_bytes()),
            validation,
        };

        Ok(Self {
            config: Arc::new(config),
            keys: Arc::new(keys),
        })
    }

    pub fn token_ttl_in_seconds(&self) -> i64 {
        self.config.token_ttl_in_seconds
    }

    /// Mints a token as if it had been issued at `issued_at`.
    pub fn mint_at(
        &self,
        subject: &Username,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedSession, SessionError> {
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds)
            .ok_or_else(|| SessionError::Signing("Invalid token lifetime".to_string()))?;
        let expires_at = issued_at
            .checked_add_signed(delta)
            .ok_or_else(|| SessionError::Signing("Duration out of range".to_string()))?;

        let claims = SessionClaims {
            sub: subject.as_str().to_owned(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| SessionError::Signing(e.to_string()))?;

        Ok(IssuedSession { token, claims })
    }
}

impl SessionIssuer for JwtSessionIssuer {
    #[tracing::instrument(name = "Minting session token", skip_all)]
    fn mint(&self, subject: &Username) -> Result<IssuedSession, SessionError> {
        self.mint_at(subject, Utc::now())
    }

    #[tracing::instrument(name = "Verifying session token", skip_all)]
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        decode::<SessionClaims>(token, &self.keys.decoding, &self.keys.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                ErrorKind::InvalidSignature => SessionError::SignatureMismatch,
                _ => SessionError::Malformed,
            })
    }
}
