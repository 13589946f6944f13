//! HTTP-level integration tests for registration, login, and role checks.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get, get_auth, post_json, post_json_auth, register_and_login, TEST_PASSWORD,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registration returns 201 with the account summary and never the hash.
#[tokio::test]
async fn test_register_returns_summary() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({
            "name": "  Ada  ",
            "email": "ada@redpen.test",
            "password": TEST_PASSWORD,
            "role": "AUTHOR",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Ada");
    assert_eq!(json["data"]["email"], "ada@redpen.test");
    assert_eq!(json["data"]["role"], "AUTHOR");
    assert!(json["data"].get("password_hash").is_none());
}

/// A second account with the same email is a conflict.
#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = common::build_test_app();
    register_and_login(&app, "Ada", "AUTHOR").await;

    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({
            "name": "Other Ada",
            "email": "ada@redpen.test",
            "password": TEST_PASSWORD,
            "role": "REVIEWER",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

/// Short passwords are rejected before anything is stored.
#[tokio::test]
async fn test_register_short_password_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({
            "name": "Ada",
            "email": "ada@redpen.test",
            "password": "short",
            "role": "AUTHOR",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns a token, its lifetime, and the user.
#[tokio::test]
async fn test_login_success() {
    let app = common::build_test_app();
    let user = register_and_login(&app, "Ada", "ADMIN").await;

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "ada@redpen.test", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["expires_in"], 3600);
    assert_eq!(json["data"]["user"]["id"], user.id);
    assert_eq!(json["data"]["user"]["role"], "ADMIN");
}

/// Wrong password and unknown email produce the same 401.
#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = common::build_test_app();
    register_and_login(&app, "Ada", "AUTHOR").await;

    let wrong_password = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "ada@redpen.test", "password": "not-the-password" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    let unknown_email = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "nobody@redpen.test", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(unknown_email).await;

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["error"], "Invalid credentials");
}

// ---------------------------------------------------------------------------
// Token handling
// ---------------------------------------------------------------------------

/// `/auth/me` echoes the token's claims.
#[tokio::test]
async fn test_me_returns_claims() {
    let app = common::build_test_app();
    let user = register_and_login(&app, "Rita", "REVIEWER").await;

    let response = get_auth(app, "/api/v1/auth/me", &user.token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], user.id);
    assert_eq!(json["data"]["role"], "REVIEWER");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "Missing Authorization header"
    );
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = common::build_test_app();
    let response = get_auth(app, "/api/v1/auth/me", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

/// Each role is confined to its own route group.
#[tokio::test]
async fn test_role_gates_route_groups() {
    let app = common::build_test_app();
    let author = register_and_login(&app, "Ada", "AUTHOR").await;
    let reviewer = register_and_login(&app, "Rita", "REVIEWER").await;
    let admin = register_and_login(&app, "Ed", "ADMIN").await;

    let response = get_auth(app.clone(), "/api/v1/admin/articles", &author.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "ADMIN role required");

    let response = get_auth(app.clone(), "/api/v1/reviewer/articles", &admin.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/articles",
        json!({ "title": "Cats", "content": "The cat sat" }),
        &reviewer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, "/api/v1/author/articles", &author.token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
