mod common;

use auth::TokenCodec;
use chrono::Duration;
use common::TestApp;
use common::JWT_SECRET;
use reqwest::StatusCode;
use serde_json::json;

/// Register a user and log them in, returning (user_id, access_token).
async fn register_and_login(app: &TestApp, name: &str, email: &str, password: &str) -> (String, String) {
    let response = app
        .post("/api/users")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let user_id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    (user_id, token)
}

#[tokio::test]
async fn test_register_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "name": "Nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    // The password digest never appears in a response
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_user_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post("/api/users")
        .json(&json!({
            "name": "Nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/users")
        .json(&json!({
            "name": "Other Nicola",
            "email": "nicola@example.com",
            "password": "pass_word!2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_user_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "name": "Nicola",
            "email": "not-an-email",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let app = TestApp::spawn().await;

    let (_, token) = register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    // Three dot-separated segments
    assert_eq!(token.split('.').count(), 3);

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["token_type"], "bearer");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    // Wrong password for a registered email
    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "wrong_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Unregistered email
    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "ghost@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Same status, same body: no way to probe which emails exist
    let wrong_password_body: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_email_body: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password_body, unknown_email_body);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/posts")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_rejects_non_bearer_scheme() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/posts")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_rejects_tampered_token() {
    let app = TestApp::spawn().await;

    let (_, token) = register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    // Flip the last character of the signature segment
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app
        .get_authenticated("/api/posts", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_rejects_expired_token() {
    let app = TestApp::spawn().await;

    register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    // Correctly signed, but expired an hour ago
    let codec = TokenCodec::new(JWT_SECRET, Duration::hours(-1));
    let expired = codec.issue("nicola@example.com").unwrap();

    let response = app
        .get_authenticated("/api/posts", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_rejections_are_uniform() {
    let app = TestApp::spawn().await;

    let (_, valid) = register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    let mut tampered = valid.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let expired = TokenCodec::new(JWT_SECRET, Duration::hours(-1))
        .issue("nicola@example.com")
        .unwrap();

    let missing = app.get("/api/posts").send().await.unwrap();
    let bad_signature = app
        .get_authenticated("/api/posts", &tampered)
        .send()
        .await
        .unwrap();
    let past_expiry = app
        .get_authenticated("/api/posts", &expired)
        .send()
        .await
        .unwrap();

    // Every rejection reads identically to the caller
    let missing_body: serde_json::Value = missing.json().await.unwrap();
    let bad_signature_body: serde_json::Value = bad_signature.json().await.unwrap();
    let past_expiry_body: serde_json::Value = past_expiry.json().await.unwrap();
    assert_eq!(missing_body, bad_signature_body);
    assert_eq!(bad_signature_body, past_expiry_body);
}

#[tokio::test]
async fn test_create_and_get_post() {
    let app = TestApp::spawn().await;

    let (user_id, token) =
        register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    let response = app
        .post_authenticated("/api/posts", &token)
        .json(&json!({
            "title": "First post",
            "body": "Hello from the blog"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "First post");
    // Authorship comes from the token subject, not the request body
    assert_eq!(body["data"]["author_id"], user_id.as_str());

    let post_id = body["data"]["id"].as_str().unwrap();

    let response = app
        .get_authenticated(&format!("/api/posts/{}", post_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["body"], "Hello from the blog");
}

#[tokio::test]
async fn test_list_posts() {
    let app = TestApp::spawn().await;

    let (_, token) = register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    for i in 1..=3 {
        app.post_authenticated("/api/posts", &token)
            .json(&json!({
                "title": format!("Post {}", i),
                "body": "body"
            }))
            .send()
            .await
            .expect("Failed to execute request");
    }

    let response = app
        .get_authenticated("/api/posts", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_post_author_only() {
    let app = TestApp::spawn().await;

    let (_, author_token) =
        register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;
    let (_, other_token) =
        register_and_login(&app, "Marco", "marco@example.com", "pass_word!2").await;

    let response = app
        .post_authenticated("/api/posts", &author_token)
        .json(&json!({
            "title": "First post",
            "body": "Hello from the blog"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.unwrap();
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    // Someone else cannot touch it
    let response = app
        .patch_authenticated(&format!("/api/posts/{}", post_id), &other_token)
        .json(&json!({ "title": "Hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The author can
    let response = app
        .patch_authenticated(&format!("/api/posts/{}", post_id), &author_token)
        .json(&json!({ "title": "Renamed" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["title"], "Renamed");
    assert_eq!(body["data"]["body"], "Hello from the blog");
}

#[tokio::test]
async fn test_delete_post() {
    let app = TestApp::spawn().await;

    let (_, token) = register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    let response = app
        .post_authenticated("/api/posts", &token)
        .json(&json!({
            "title": "Short lived",
            "body": "soon gone"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.unwrap();
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .delete_authenticated(&format!("/api/posts/{}", post_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .get_authenticated(&format!("/api/posts/{}", post_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_public() {
    let app = TestApp::spawn().await;

    let (user_id, _) =
        register_and_login(&app, "Nicola", "nicola@example.com", "pass_word!").await;

    // No token required
    let response = app
        .get(&format!("/api/users/{}", user_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "nicola@example.com");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}
