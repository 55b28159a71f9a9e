use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE, request},
    routing::post,
};
use latchkey_adapters::{
    auth::SessionCookie,
    config::AllowedOrigins,
    http::routes::{login, logout, register, verify_token},
};
use latchkey_core::{CredentialHasher, CredentialStore, SessionIssuer};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the authentication service
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService from its collaborators
    ///
    /// # Arguments
    /// * `credential_store` - Where identities are created and looked up
    /// * `hasher` - Password hashing used on register and login
    /// * `session_issuer` - Mints and verifies session tokens
    /// * `session_cookie` - Shape of the `Set-Cookie` carrying the token
    ///
    /// Each route gets only the state it needs.
    pub fn new<S, H, I>(
        credential_store: S,
        hasher: H,
        session_issuer: I,
        session_cookie: SessionCookie,
    ) -> Self
    where
        S: CredentialStore + Clone + 'static,
        H: CredentialHasher + Clone + 'static,
        I: SessionIssuer + Clone + 'static,
    {
        let router = Router::new()
            .route("/register", post(register::<S, H>))
            .with_state((credential_store.clone(), hasher.clone()))
            .route("/login", post(login::<S, H, I>))
            .with_state((
                credential_store,
                hasher,
                session_issuer.clone(),
                session_cookie.clone(),
            ))
            .route("/logout", post(logout))
            .with_state(session_cookie.clone())
            .route("/verify-token", post(verify_token::<I>))
            .with_state((session_issuer, session_cookie));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be served or nested
    ///
    /// # Arguments
    /// * `allowed_origins` - Origins allowed to send credentialed requests.
    ///   `None` allows any origin without credentials.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        let cors = match allowed_origins {
            Some(allowed_origins) => CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::HEAD])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                )),
            None => CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::HEAD])
                .allow_headers(Any)
                .allow_origin(Any),
        };

        self.router = self.router.layer(cors);
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
