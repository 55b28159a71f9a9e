use color_eyre::eyre::{Result, WrapErr};
use latchkey_adapters::{
    auth::{
        Argon2CredentialHasher, DEFAULT_COOKIE_NAME, JwtAuthConfig, JwtSessionIssuer, SessionCookie,
    },
    config::Settings,
    persistence::PostgresCredentialStore,
};
use latchkey_service::{AuthService, helpers::configure_postgresql, telemetry::init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    init_tracing()?;

    let settings = Settings::load().wrap_err("Failed to load configuration")?;

    let session_issuer = JwtSessionIssuer::new(JwtAuthConfig::new(settings.auth.jwt_secret))
        .wrap_err("Failed to create session issuer")?;
    let session_cookie = SessionCookie::new(DEFAULT_COOKIE_NAME, settings.auth.cookie_secure);

    let hasher = Argon2CredentialHasher::new(
        settings.hashing.memory_kib,
        settings.hashing.iterations,
        settings.hashing.parallelism,
    )
    .wrap_err("Invalid password hashing parameters")?;

    let pg_pool = configure_postgresql(&settings.database)
        .await
        .wrap_err("Failed to connect to PostgreSQL")?;
    let credential_store = PostgresCredentialStore::new(pg_pool);

    let auth_service = AuthService::new(credential_store, hasher, session_issuer, session_cookie);

    let listener = tokio::net::TcpListener::bind(&settings.server.app_address).await?;
    tracing::info!("Starting latchkey...");

    auth_service
        .run_standalone(listener, settings.server.allowed_origins)
        .await?;

    Ok(())
}
