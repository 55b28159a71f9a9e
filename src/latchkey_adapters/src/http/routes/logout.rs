use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::SessionCookie;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Tells the client to drop its session cookie.
///
/// Tokens are stateless, so a copy of the token kept elsewhere stays valid
/// until it expires.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(
    State(session_cookie): State<SessionCookie>,
    jar: CookieJar,
) -> impl IntoResponse {
    let updated_jar = jar.add(session_cookie.removal(OffsetDateTime::now_utc()));

    (
        StatusCode::OK,
        updated_jar,
        Json(MessageResponse::new("Logout successful")),
    )
}
