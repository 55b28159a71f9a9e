use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use latchkey_application::RegisterUseCase;
use latchkey_core::{ContactDetails, CredentialHasher, CredentialStore, Password, Username};
use secrecy::Secret;
use serde::Deserialize;

use super::{error::AuthApiError, logout::MessageResponse};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: Secret<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, H>(
    State((credential_store, hasher)): State<(S, H)>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: CredentialStore + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
{
    let Json(request) = payload?;

    let username = Username::try_from(request.username)?;
    let password = Password::try_from(request.password)?;
    let contact = ContactDetails {
        email: request.email.filter(|email| !email.is_empty()),
        tel: request.tel.filter(|tel| !tel.is_empty()),
    };

    let use_case = RegisterUseCase::new(&credential_store, &hasher);
    use_case.execute(username, password, contact).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}
