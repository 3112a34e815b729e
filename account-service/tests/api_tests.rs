mod common;

use auth::Claims;
use common::TestApp;
use common::TEST_PASSWORD;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "nicola@example.com",
            "password": TEST_PASSWORD,
            "display_name": "Nicola"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "nicola@example.com");
    assert_eq!(body["display_name"], "Nicola");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    // The secret never comes back in any form
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_weak_password_reports_every_rule() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "password",
            "display_name": "Nicola"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let rules: Vec<&str> = body["details"]["password"]
        .as_array()
        .expect("Expected rule list in details")
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(rules.contains(&"password_too_short"));
    assert!(rules.contains(&"password_missing_uppercase"));
    assert!(rules.contains(&"password_missing_digit"));
    assert!(rules.contains(&"password_missing_symbol"));
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "not-an-email",
            "password": TEST_PASSWORD,
            "display_name": "Nicola"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["email"].is_string());
}

#[tokio::test]
async fn test_signup_reports_all_invalid_fields_at_once() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "not-an-email",
            "password": "password",
            "display_name": "   "
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // One response carries every violated field, not just the first
    assert!(body["details"]["email"].is_string());
    assert!(body["details"]["display_name"].is_string());
    let rules: Vec<&str> = body["details"]["password"]
        .as_array()
        .expect("Expected rule list for password")
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(rules.contains(&"password_too_short"));
    assert!(rules.contains(&"password_missing_uppercase"));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::spawn().await;

    app.signup("nicola@example.com", "Nicola").await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "nicola@example.com",
            "password": TEST_PASSWORD,
            "display_name": "Other Nicola"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "DB_DUPLICATE");
}

#[tokio::test]
async fn test_login_success_and_token_admits() {
    let app = TestApp::spawn().await;

    let created = app.signup("nicola@example.com", "Nicola").await;
    let token = app.login("nicola@example.com", TEST_PASSWORD).await;
    assert!(!token.is_empty());

    // The downstream handler observes the subject the gate validated
    let response = app
        .get("/api/auth/me")
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["email"], "nicola@example.com");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.signup("nicola@example.com", "Nicola").await;

    // Unknown email
    let unknown = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "ghost@example.com",
            "password": TEST_PASSWORD
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Known email, wrong password
    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Wrong1234!@#$"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    // Byte-identical bodies: nothing distinguishes the two causes
    let unknown_body = unknown.bytes().await.expect("Failed to read body");
    let wrong_password_body = wrong_password.bytes().await.expect("Failed to read body");
    assert_eq!(unknown_body, wrong_password_body);

    let body: serde_json::Value =
        serde_json::from_slice(&unknown_body).expect("Failed to parse body");
    assert_eq!(body["code"], "AUTH_INVALID");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_me_expired_token_matches_no_token_shape() {
    let app = TestApp::spawn().await;

    let created = app.signup("nicola@example.com", "Nicola").await;
    let subject = created["id"].as_str().unwrap();

    // Mint a token that expired a minute ago, signed with the right key
    let now = chrono::Utc::now().timestamp();
    let expired_token = app
        .token_codec
        .encode(&Claims {
            sub: subject.to_string(),
            iat: now - 3660,
            exp: now - 60,
        })
        .expect("Failed to encode expired token");

    let no_token = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    let expired = app
        .get("/api/auth/me")
        .header("Authorization", format!("Bearer {}", expired_token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(no_token.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);

    // The wire must not reveal which check failed
    let no_token_body = no_token.bytes().await.expect("Failed to read body");
    let expired_body = expired.bytes().await.expect("Failed to read body");
    assert_eq!(no_token_body, expired_body);
}

#[tokio::test]
async fn test_me_token_signed_with_wrong_key() {
    let app = TestApp::spawn().await;

    let created = app.signup("nicola@example.com", "Nicola").await;
    let subject = created["id"].as_str().unwrap();

    let foreign_codec = auth::TokenCodec::new(b"a-completely-different-32-byte-key!!");
    let forged = foreign_codec
        .issue(subject, chrono::Duration::hours(1))
        .expect("Failed to issue forged token");

    let response = app
        .get("/api/auth/me")
        .header("Authorization", format!("Bearer {}", forged))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_me_malformed_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .header("Authorization", "Token abc123")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_login_response_carries_account_without_secret() {
    let app = TestApp::spawn().await;

    app.signup("nicola@example.com", "Nicola").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": TEST_PASSWORD
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["account"]["email"], "nicola@example.com");
    assert!(body["account"].get("password_hash").is_none());
}
