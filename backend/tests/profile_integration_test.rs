//! Integration tests for user profile endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_profile() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app.get_auth("/api/user/profile", &user.token).await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["username"], user.username.as_str());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_profile_without_token() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/api/user/profile").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(response.contains("MISSING_TOKEN"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_profile_keeps_unset_fields() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({"display_name": "First", "email": "first@example.com"});
    let (status, _) = app
        .put_auth("/api/user/profile", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let body = json!({"display_name": "Second"});
    let (status, response) = app
        .put_auth("/api/user/profile", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["display_name"], "Second");
    assert_eq!(response["email"], "first@example.com");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_password_then_login() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({"password": "BrandNewPassword!"});
    let (status, _) = app
        .put_auth("/api/user/profile", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let old = json!({"username": user.username, "password": user.password});
    let (status, _) = app.post("/api/auth/login", &old.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let new = json!({"username": user.username, "password": "BrandNewPassword!"});
    let (status, _) = app.post("/api/auth/login", &new.to_string()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_profile_invalid_email() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({"email": "not-an-email"});
    let (status, _) = app
        .put_auth("/api/user/profile", &body.to_string(), &user.token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
