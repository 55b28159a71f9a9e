use latchkey_adapters::{
    auth::{Argon2CredentialHasher, JwtAuthConfig, JwtSessionIssuer, SessionCookie},
    config::{DatabaseSettings, test},
    persistence::PostgresCredentialStore,
};
use latchkey_service::{AuthService, helpers::configure_postgresql};
use secrecy::Secret;
use serde_json::json;
use testcontainers_modules::{postgres::Postgres, testcontainers::runners::AsyncRunner};

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn register_and_login_against_postgres() {
    let container = Postgres::default().start().await.unwrap();
    let settings = DatabaseSettings {
        host: "127.0.0.1".to_string(),
        port: container.get_host_port_ipv4(5432).await.unwrap(),
        user: "postgres".to_string(),
        password: Secret::from("postgres".to_string()),
        name: "postgres".to_string(),
        ssl_mode: "disable".to_string(),
        max_connections: 2,
    };

    let pg_pool = configure_postgresql(&settings).await.unwrap();
    let session_issuer =
        JwtSessionIssuer::new(JwtAuthConfig::new(Secret::from(test::JWT_SECRET.to_owned())))
            .unwrap();
    let auth_service = AuthService::new(
        PostgresCredentialStore::new(pg_pool),
        Argon2CredentialHasher::new(8, 1, 1).unwrap(),
        session_issuer.clone(),
        SessionCookie::default(),
    );

    let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
        .await
        .unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(auth_service.run_standalone(listener, None));
    let client = reqwest::Client::new();

    let credentials = json!({ "username": "alice", "password": "s3cret" });
    let response = client
        .post(format!("{address}/register"))
        .json(&credentials)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let response = client
        .post(format!("{address}/register"))
        .json(&credentials)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 409);

    let response = client
        .post(format!("{address}/login"))
        .json(&credentials)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}
