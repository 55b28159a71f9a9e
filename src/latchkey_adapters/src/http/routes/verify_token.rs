use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use latchkey_application::VerifySessionUseCase;
use latchkey_core::SessionIssuer;
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;
use crate::auth::SessionCookie;

#[derive(Debug, Default, Deserialize)]
pub struct VerifyTokenRequest {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub username: String,
    pub expires_at: i64,
}

/// Checks a session token taken from the body, or from the session cookie
/// when the body carries none.
#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token<I>(
    State((session_issuer, session_cookie)): State<(I, SessionCookie)>,
    jar: CookieJar,
    body: Bytes,
) -> Result<impl IntoResponse, AuthApiError>
where
    I: SessionIssuer + Clone + 'static,
{
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        VerifyTokenRequest::default()
    } else {
        serde_json::from_slice::<VerifyTokenRequest>(&body)
            .map_err(|_| AuthApiError::BadRequest("Invalid request payload".to_string()))?
    };

    let token = request
        .token
        .filter(|token| !token.is_empty())
        .or_else(|| {
            jar.get(session_cookie.name())
                .map(|cookie| cookie.value().to_owned())
        });

    let use_case = VerifySessionUseCase::new(&session_issuer);
    let claims = use_case.execute(token.as_deref())?;

    Ok((
        StatusCode::OK,
        Json(VerifyTokenResponse {
            username: claims.sub,
            expires_at: claims.exp,
        }),
    ))
}
