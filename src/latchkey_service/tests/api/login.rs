use latchkey_core::SessionIssuer;
use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_username};

#[tokio::test]
async fn should_return_200_with_token_and_cookie() {
    let app = TestApp::new().await;
    let (username, password) = app.register_random_user().await;

    let response = app
        .post_login(&json!({ "username": username, "password": password }))
        .await;

    assert_eq!(response.status().as_u16(), 200);

    let cookie = response
        .cookies()
        .find(|cookie| cookie.name() == "token")
        .expect("No session cookie found");
    assert!(cookie.http_only());
    assert_eq!(cookie.path(), Some("/"));
    let cookie_value = cookie.value().to_owned();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(token, cookie_value);

    let claims = app.session_issuer.verify(token).unwrap();
    assert_eq!(claims.sub, username);
    assert_eq!(claims.exp - claims.iat, 300);
}

#[tokio::test]
async fn should_return_identical_401_for_wrong_password_and_unknown_user() {
    let app = TestApp::new().await;
    let (username, _) = app.register_random_user().await;

    let wrong_password = app
        .post_login(&json!({ "username": username, "password": "wrong-password" }))
        .await;
    let unknown_user = app
        .post_login(&json!({ "username": get_random_username(), "password": "wrong-password" }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_user.status().as_u16(), 401);
    assert!(wrong_password.headers().get("set-cookie").is_none());

    let wrong_password_body = wrong_password.bytes().await.unwrap();
    let unknown_user_body = unknown_user.bytes().await.unwrap();
    assert_eq!(wrong_password_body, unknown_user_body);

    let body: Value = serde_json::from_slice(&wrong_password_body).unwrap();
    assert_eq!(body, json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn should_return_400_if_malformed_input() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "username": get_random_username() }),
        json!({ "password": "password123" }),
        json!({ "username": "", "password": "password123" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_login(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }

    let response = app.post_raw("/login", "not json at all").await;
    assert_eq!(response.status().as_u16(), 400);
}
