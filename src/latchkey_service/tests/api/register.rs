use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_username};

#[tokio::test]
async fn should_return_201_if_valid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({
            "username": get_random_username(),
            "password": "password123",
            "email": "someone@example.com",
            "tel": "1234567890",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "User created successfully" }));
    assert_eq!(app.credential_store.len().await, 1);
}

#[tokio::test]
async fn should_return_400_if_malformed_input() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "password": "password123" }),
        json!({ "username": get_random_username() }),
        json!({ "username": 42, "password": "password123" }),
        json!({}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid request payload");
    }

    let response = app.post_raw("/register", "{not json").await;
    assert_eq!(response.status().as_u16(), 400);
    assert!(app.credential_store.is_empty().await);
}

#[tokio::test]
async fn should_return_400_if_empty_credentials() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "username": "", "password": "password123" }),
        json!({ "username": get_random_username(), "password": "" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }

    assert!(app.credential_store.is_empty().await);
}

#[tokio::test]
async fn should_return_409_if_username_already_exists() {
    let app = TestApp::new().await;
    let (username, password) = app.register_random_user().await;

    let response = app
        .post_register(&json!({ "username": username, "password": "different-password" }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "User already exists");
    assert_eq!(app.credential_store.len().await, 1);

    // The original password still works, the rejected one does not
    let response = app
        .post_login(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let response = app
        .post_login(&json!({ "username": username, "password": "different-password" }))
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
    let app = TestApp::new().await;

    for username in ["carol", "Carol"] {
        let response = app
            .post_register(&json!({ "username": username, "password": "password123" }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    assert_eq!(app.credential_store.len().await, 2);
}

#[tokio::test]
async fn concurrent_registrations_of_one_username_create_exactly_one_user() {
    let app = TestApp::new().await;
    let username = get_random_username();
    let attempts = 16;

    let mut handles = Vec::with_capacity(attempts);
    for _ in 0..attempts {
        let client = app.http_client.clone();
        let url = format!("{}/register", &app.address);
        let body = json!({ "username": username, "password": "password123" });
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&body)
                .send()
                .await
                .expect("Failed to execute request.")
                .status()
                .as_u16()
        }));
    }

    let mut statuses = Vec::with_capacity(attempts);
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|&&s| s == 201).count(), 1);
    assert_eq!(
        statuses.iter().filter(|&&s| s == 409).count(),
        attempts - 1
    );
    assert_eq!(app.credential_store.len().await, 1);
}
