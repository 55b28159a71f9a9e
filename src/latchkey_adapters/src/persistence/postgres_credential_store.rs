use latchkey_core::{
    ContactDetails, CredentialStore, CredentialStoreError, IdentityId, IdentityRecord,
    NewIdentity, PasswordHash, Username,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};

#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresCredentialStore { pool }
    }
}

#[async_trait::async_trait]
impl CredentialStore for PostgresCredentialStore {
    #[tracing::instrument(name = "Adding identity to PostgreSQL", skip_all)]
    async fn create_identity(&self, identity: NewIdentity) -> Result<(), CredentialStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (username, password_hash, email, tel)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(identity.username.as_str())
        .bind(identity.password_hash.as_ref().expose_secret().as_str())
        .bind(identity.contact.email.as_deref())
        .bind(identity.contact.tel.as_deref());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return CredentialStoreError::AlreadyExists;
                }
            }
            classify_error(e)
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Looking up identity in PostgreSQL", skip_all)]
    async fn lookup_identity(
        &self,
        username: &Username,
    ) -> Result<IdentityRecord, CredentialStoreError> {
        let query = sqlx::query(
            r#"
                SELECT id, username, password_hash, email, tel
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_str());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_error)?;

        let Some(row) = row else {
            return Err(CredentialStoreError::NotFound);
        };

        identity_from_row(&row)
    }
}

fn identity_from_row(row: &PgRow) -> Result<IdentityRecord, CredentialStoreError> {
    let id: i64 = row.try_get("id").map_err(classify_error)?;
    let username: String = row.try_get("username").map_err(classify_error)?;
    let password_hash: String = row.try_get("password_hash").map_err(classify_error)?;
    let email: Option<String> = row.try_get("email").map_err(classify_error)?;
    let tel: Option<String> = row.try_get("tel").map_err(classify_error)?;

    let username = Username::parse(username)
        .map_err(|e| CredentialStoreError::StorageFailure(e.to_string()))?;

    Ok(IdentityRecord::new(
        IdentityId::new(id),
        username,
        PasswordHash::new(Secret::from(password_hash)),
        ContactDetails { email, tel },
    ))
}

// Connectivity problems must never look like a missing identity.
fn classify_error(error: sqlx::Error) -> CredentialStoreError {
    match &error {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => CredentialStoreError::Unavailable(error.to_string()),
        _ => CredentialStoreError::StorageFailure(error.to_string()),
    }
}
