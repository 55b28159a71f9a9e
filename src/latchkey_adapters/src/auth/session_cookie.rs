use axum_extra::extract::cookie::{Cookie, SameSite};
use latchkey_core::IssuedSession;
use time::{Duration, OffsetDateTime};

pub const DEFAULT_COOKIE_NAME: &str = "token";

/// Builds the cookies carrying a session token.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cookie holding the token, expiring together with it.
    pub fn issue(&self, session: &IssuedSession) -> Cookie<'static> {
        let mut cookie = self.base(session.token.clone());
        if let Ok(expires_at) = OffsetDateTime::from_unix_timestamp(session.claims.exp) {
            cookie.set_expires(expires_at);
        }
        cookie
    }

    /// Cookie that tells the client to drop the token.
    pub fn removal(&self, now: OffsetDateTime) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.make_removal();
        cookie.set_expires(now - Duration::hours(1));
        cookie
    }

    fn base(&self, value: String) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .path("/") // apply cookie to all URLs on the server
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build()
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new(DEFAULT_COOKIE_NAME, false)
    }
}
