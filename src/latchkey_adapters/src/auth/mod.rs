pub mod argon2_hasher;
pub mod jwt_session_issuer;
pub mod session_cookie;

pub use argon2_hasher::Argon2CredentialHasher;
pub use jwt_session_issuer::{JwtAuthConfig, JwtSessionIssuer, SESSION_TTL_SECONDS};
pub use session_cookie::{DEFAULT_COOKIE_NAME, SessionCookie};
