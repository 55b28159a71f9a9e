use chrono::{Duration, Utc};
use latchkey_core::Username;
use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_200_for_token_in_body() {
    let app = TestApp::new().await;
    let (username, password) = app.register_random_user().await;
    let response = app
        .post_login(&json!({ "username": username, "password": password }))
        .await;
    let body: Value = response.json().await.unwrap();

    let response = app
        .post_verify_token(&json!({ "token": body["token"] }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], username.as_str());
    assert!(body["expires_at"].as_i64().unwrap() > Utc::now().timestamp());
}

#[tokio::test]
async fn should_fall_back_to_the_session_cookie() {
    let app = TestApp::new().await;
    let (username, password) = app.register_random_user().await;
    app.post_login(&json!({ "username": username, "password": password }))
        .await;

    let response = app.post_verify_token_without_body().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], username.as_str());
}

#[tokio::test]
async fn should_return_401_if_token_missing() {
    let app = TestApp::new().await;

    let response = app.post_verify_token_without_body().await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app.post_verify_token(&json!({})).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_token_malformed() {
    let app = TestApp::new().await;

    let response = app
        .post_verify_token(&json!({ "token": "invalid_token" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Malformed token");
}

#[tokio::test]
async fn should_return_401_if_token_expired() {
    let app = TestApp::new().await;
    let issued_at = Utc::now() - Duration::minutes(10);
    let session = app
        .session_issuer
        .mint_at(&Username::parse("alice").unwrap(), issued_at)
        .unwrap();

    let response = app
        .post_verify_token(&json!({ "token": session.token }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn should_return_401_if_token_tampered() {
    let app = TestApp::new().await;
    let alice = app
        .session_issuer
        .mint_at(&Username::parse("alice").unwrap(), Utc::now())
        .unwrap()
        .token;
    let mallory = app
        .session_issuer
        .mint_at(&Username::parse("mallory").unwrap(), Utc::now())
        .unwrap()
        .token;

    let alice_parts: Vec<&str> = alice.split('.').collect();
    let mallory_parts: Vec<&str> = mallory.split('.').collect();
    let forged = format!("{}.{}.{}", alice_parts[0], mallory_parts[1], alice_parts[2]);

    let response = app.post_verify_token(&json!({ "token": forged })).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Token signature mismatch");
}
