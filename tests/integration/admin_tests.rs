//! Admin portal integration tests.
//!
//! Tests verify:
//! - Correct Basic credentials are accepted
//! - Wrong user, wrong password, and missing credentials are rejected
//! - Any method reaches the gate

use axum::body::Body;
use axum::http::{header, Request, StatusCode};

use super::test_utils::{basic_auth, body_string, get, send, test_router, TEST_ADMIN_PASSWORD};

fn admin_request(method: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri("/admin");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_admin_valid_credentials() {
    let router = test_router();
    let auth = basic_auth("admin", TEST_ADMIN_PASSWORD);

    let response = send(&router, admin_request("GET", Some(&auth))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(body_string(response).await.contains("admin portal"));
}

#[tokio::test]
async fn test_admin_wrong_password() {
    let router = test_router();
    let auth = basic_auth("admin", "wrong");

    let response = send(&router, admin_request("GET", Some(&auth))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "401 - Unauthorized");
}

#[tokio::test]
async fn test_admin_wrong_username() {
    let router = test_router();
    let auth = basic_auth("root", TEST_ADMIN_PASSWORD);

    let response = send(&router, admin_request("GET", Some(&auth))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_missing_credentials() {
    let router = test_router();

    let response = send(&router, get("/admin")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    assert_eq!(body_string(response).await, "401 - Unauthorized");
}

#[tokio::test]
async fn test_admin_malformed_header() {
    let router = test_router();

    for value in ["Bearer token", "Basic !!!", "Basic"] {
        let response = send(&router, admin_request("GET", Some(value))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "header: {}", value);
    }
}

#[tokio::test]
async fn test_admin_any_method() {
    let router = test_router();
    let auth = basic_auth("admin", TEST_ADMIN_PASSWORD);

    for method in ["POST", "PUT", "DELETE"] {
        let response = send(&router, admin_request(method, Some(&auth))).await;
        assert_eq!(response.status(), StatusCode::OK, "method: {}", method);

        let response = send(&router, admin_request(method, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "method: {}", method);
    }
}

#[tokio::test]
async fn test_admin_reauthenticates_every_request() {
    let router = test_router();
    let auth = basic_auth("admin", TEST_ADMIN_PASSWORD);

    let response = send(&router, admin_request("GET", Some(&auth))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&router, admin_request("GET", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
