use latchkey_core::{SessionClaims, SessionError, SessionIssuer};

#[derive(Debug, thiserror::Error)]
pub enum VerifySessionError {
    #[error("Missing token")]
    MissingToken,
    #[error("{0}")]
    SessionError(#[from] SessionError),
}

/// Checks a presented session token and returns its claims.
pub struct VerifySessionUseCase<'a, I>
where
    I: SessionIssuer,
{
    session_issuer: &'a I,
}

impl<'a, I> VerifySessionUseCase<'a, I>
where
    I: SessionIssuer,
{
    pub fn new(session_issuer: &'a I) -> Self {
        Self { session_issuer }
    }

    #[tracing::instrument(name = "VerifySessionUseCase::execute", skip_all)]
    pub fn execute(&self, token: Option<&str>) -> Result<SessionClaims, VerifySessionError> {
        let token = token
            .filter(|token| !token.is_empty())
            .ok_or(VerifySessionError::MissingToken)?;

        Ok(self.session_issuer.verify(token)?)
    }
}
