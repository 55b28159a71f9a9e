use std::str::FromStr;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use super::constants::{defaults, env, prod};

/// Flat view of the process environment, keyed by lower-cased variable name.
#[derive(Deserialize)]
struct RawSettings {
    db_host: String,
    db_port: u16,
    db_user: String,
    db_password: String,
    db_name: String,
    db_sslmode: String,
    db_max_connections: u32,
    jwt_secret_key: String,
    cookie_secure: bool,
    app_address: String,
    allowed_origins: Option<String>,
    hash_memory_kib: u32,
    hash_iterations: u32,
    hash_parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub hashing: HashingSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Secret<String>,
    pub name: String,
    pub ssl_mode: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub app_address: String,
    pub allowed_origins: Option<AllowedOrigins>,
}

impl Settings {
    /// Reads the settings from the process environment.
    ///
    /// Fails when `JWT_SECRET_KEY` is unset or a value cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .set_default(key(env::DB_HOST_ENV_VAR), defaults::DB_HOST)?
            .set_default(key(env::DB_PORT_ENV_VAR), i64::from(defaults::DB_PORT))?
            .set_default(key(env::DB_USER_ENV_VAR), defaults::DB_USER)?
            .set_default(key(env::DB_PASSWORD_ENV_VAR), defaults::DB_PASSWORD)?
            .set_default(key(env::DB_NAME_ENV_VAR), defaults::DB_NAME)?
            .set_default(key(env::DB_SSLMODE_ENV_VAR), defaults::DB_SSLMODE)?
            .set_default(
                key(env::DB_MAX_CONNECTIONS_ENV_VAR),
                i64::from(defaults::DB_MAX_CONNECTIONS),
            )?
            .set_default(key(env::COOKIE_SECURE_ENV_VAR), defaults::COOKIE_SECURE)?
            .set_default(key(env::APP_ADDRESS_ENV_VAR), prod::APP_ADDRESS)?
            .set_default(key(env::HASH_MEMORY_KIB_ENV_VAR), i64::from(defaults::HASH_MEMORY_KIB))?
            .set_default(key(env::HASH_ITERATIONS_ENV_VAR), i64::from(defaults::HASH_ITERATIONS))?
            .set_default(
                key(env::HASH_PARALLELISM_ENV_VAR),
                i64::from(defaults::HASH_PARALLELISM),
            )?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(raw.into())
    }
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        Self {
            database: DatabaseSettings {
                host: raw.db_host,
                port: raw.db_port,
                user: raw.db_user,
                password: Secret::from(raw.db_password),
                name: raw.db_name,
                ssl_mode: raw.db_sslmode,
                max_connections: raw.db_max_connections,
            },
            auth: AuthSettings {
                jwt_secret: Secret::from(raw.jwt_secret_key),
                cookie_secure: raw.cookie_secure,
            },
            hashing: HashingSettings {
                memory_kib: raw.hash_memory_kib,
                iterations: raw.hash_iterations,
                parallelism: raw.hash_parallelism,
            },
            server: ServerSettings {
                app_address: raw.app_address,
                allowed_origins: raw.allowed_origins.as_deref().and_then(AllowedOrigins::parse),
            },
        }
    }
}

fn key(env_var: &str) -> String {
    env_var.to_lowercase()
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let ssl_mode = PgSslMode::from_str(&self.ssl_mode)?;

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.name)
            .ssl_mode(ssl_mode))
    }
}

/// Origins allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    /// Parses a comma-separated list. Returns `None` when no origin is named.
    pub fn parse(raw: &str) -> Option<Self> {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        if origins.is_empty() {
            None
        } else {
            Some(Self(origins))
        }
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}
