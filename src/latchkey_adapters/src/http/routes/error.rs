use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use latchkey_application::{LoginError, RegisterError, VerifySessionError};
use latchkey_core::{CredentialError, CredentialStoreError, SessionError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    InvalidToken(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::InvalidCredentials | AuthApiError::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            AuthApiError::UserAlreadyExists => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::UnexpectedError(ref detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "Rejected request body");
        AuthApiError::BadRequest("Invalid request payload".to_string())
    }
}

impl From<CredentialError> for AuthApiError {
    fn from(error: CredentialError) -> Self {
        AuthApiError::BadRequest(error.to_string())
    }
}

impl From<CredentialStoreError> for AuthApiError {
    fn from(error: CredentialStoreError) -> Self {
        match error {
            CredentialStoreError::AlreadyExists => AuthApiError::UserAlreadyExists,
            CredentialStoreError::NotFound => AuthApiError::InvalidCredentials,
            CredentialStoreError::Unavailable(_) | CredentialStoreError::StorageFailure(_) => {
                AuthApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<SessionError> for AuthApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::Malformed | SessionError::SignatureMismatch | SessionError::Expired => {
                AuthApiError::InvalidToken(error.to_string())
            }
            SessionError::MissingSecret | SessionError::Signing(_) => {
                AuthApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::CredentialStoreError(e) => e.into(),
            RegisterError::HashingError(e) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AuthApiError::InvalidCredentials,
            LoginError::CredentialStoreError(e) => AuthApiError::UnexpectedError(e.to_string()),
            LoginError::HashingError(e) => AuthApiError::UnexpectedError(e.to_string()),
            LoginError::SessionError(e) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<VerifySessionError> for AuthApiError {
    fn from(error: VerifySessionError) -> Self {
        match error {
            VerifySessionError::MissingToken => AuthApiError::InvalidToken(error.to_string()),
            VerifySessionError::SessionError(e) => e.into(),
        }
    }
}
