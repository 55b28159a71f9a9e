use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use latchkey_application::LoginUseCase;
use latchkey_core::{CredentialHasher, CredentialStore, Password, SessionIssuer, Username};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;
use crate::auth::SessionCookie;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, H, I>(
    State((credential_store, hasher, session_issuer, session_cookie)): State<(
        S,
        H,
        I,
        SessionCookie,
    )>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: CredentialStore + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
    I: SessionIssuer + Clone + 'static,
{
    let Json(request) = payload?;

    let username = Username::try_from(request.username)?;
    let password = Password::try_from(request.password)?;

    let use_case = LoginUseCase::new(&credential_store, &hasher, &session_issuer);
    let session = use_case.execute(username, password).await?;

    let updated_jar = jar.add(session_cookie.issue(&session));

    Ok((
        StatusCode::OK,
        updated_jar,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            token: session.token,
        }),
    ))
}
