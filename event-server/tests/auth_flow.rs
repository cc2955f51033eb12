//! Registration and login flow tests
//! Run: cargo test -p event-server --test auth_flow

mod common;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::json;

use event_server::api::auth::handler::{login, register};
use event_server::{AppError, Role};
use shared::client::{AccountType, LoginRequest, RegisterRequest};

fn register_request(email: &str, roll: &str) -> RegisterRequest {
    RegisterRequest {
        full_name: "A".to_string(),
        email: email.to_string(),
        roll_number: roll.to_string(),
        password: "p1".to_string(),
    }
}

fn login_request(email: &str, password: &str, account_type: AccountType) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        account_type,
    }
}

async fn response_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, value)
}

#[tokio::test]
async fn register_returns_identity_and_token() {
    let (state, _tmp) = common::test_state().await;

    let (status, Json(resp)) = register(
        State(state.clone()),
        Json(register_request("a@x.com", "R1")),
    )
    .await
    .expect("Registration failed");

    assert_eq!(status, StatusCode::CREATED);
    assert!(resp.success);
    assert_eq!(resp.data.email, "a@x.com");
    assert_eq!(resp.data.roll_number, "R1");
    assert!(!resp.data.token.is_empty());
    assert!(resp.data.id.starts_with("student:"));

    // Token claims match the created identity
    let claims = state
        .get_jwt_service()
        .validate_token(&resp.data.token)
        .expect("Token should decode");
    assert_eq!(claims.sub, resp.data.id);
    assert_eq!(claims.role, Role::User);

    // The wire shape uses `_id` and never carries any credential material
    let value = serde_json::to_value(&resp).unwrap();
    assert!(value["data"]["_id"].is_string());
    assert!(value["data"].get("password").is_none());
    assert!(value["data"].get("hashPass").is_none());
    assert!(value["data"].get("hash_pass").is_none());
}

#[tokio::test]
async fn duplicate_email_registration_rejected() {
    let (state, _tmp) = common::test_state().await;

    register(
        State(state.clone()),
        Json(register_request("a@x.com", "R1")),
    )
    .await
    .expect("First registration failed");

    // Same email, different roll number
    let err = register(
        State(state.clone()),
        Json(register_request("a@x.com", "R2")),
    )
    .await
    .expect_err("Duplicate registration must fail");

    assert!(matches!(&err, AppError::Duplicate(_)));
    let (status, body) = response_json(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "User already exists with this email or student ID" })
    );
}

#[tokio::test]
async fn duplicate_roll_number_registration_rejected() {
    let (state, _tmp) = common::test_state().await;

    register(
        State(state.clone()),
        Json(register_request("a@x.com", "R1")),
    )
    .await
    .expect("First registration failed");

    // Different email, same roll number
    let err = register(
        State(state.clone()),
        Json(register_request("b@x.com", "R1")),
    )
    .await
    .expect_err("Duplicate registration must fail");

    let (status, body) = response_json(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "User already exists with this email or student ID"
    );
}

#[tokio::test]
async fn login_returns_role_and_strips_credentials() {
    let (state, _tmp) = common::test_state().await;

    register(
        State(state.clone()),
        Json(register_request("a@x.com", "R1")),
    )
    .await
    .expect("Registration failed");

    let Json(resp) = login(
        State(state.clone()),
        Json(login_request("a@x.com", "p1", AccountType::User)),
    )
    .await
    .expect("Login failed");

    assert!(resp.success);
    assert_eq!(resp.data.email, "a@x.com");
    assert_eq!(resp.data.role, "user");
    assert_eq!(resp.data.roll_number.as_deref(), Some("R1"));

    let claims = state
        .get_jwt_service()
        .validate_token(&resp.data.token)
        .expect("Token should decode");
    assert_eq!(claims.sub, resp.data.id);
    assert_eq!(claims.role, Role::User);

    let value = serde_json::to_value(&resp).unwrap();
    assert!(value["data"].get("password").is_none());
    assert!(value["data"].get("hashPass").is_none());
    assert!(value["data"].get("hash_pass").is_none());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (state, _tmp) = common::test_state().await;

    register(
        State(state.clone()),
        Json(register_request("a@x.com", "R1")),
    )
    .await
    .expect("Registration failed");

    // Known email, wrong password
    let wrong_password = login(
        State(state.clone()),
        Json(login_request("a@x.com", "wrong", AccountType::User)),
    )
    .await
    .expect_err("Wrong password must fail");

    // Unknown email
    let unknown_email = login(
        State(state.clone()),
        Json(login_request("nobody@x.com", "p1", AccountType::User)),
    )
    .await
    .expect_err("Unknown email must fail");

    let (status_a, body_a) = response_json(wrong_password).await;
    let (status_b, body_b) = response_json(unknown_email).await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a, body_b);
    assert_eq!(
        body_a,
        json!({ "success": false, "message": "Invalid email or password" })
    );
}

#[tokio::test]
async fn admin_login_uses_admin_partition() {
    let (state, _tmp) = common::test_state_with_admin("root@x.com", "changeme1").await;

    let Json(resp) = login(
        State(state.clone()),
        Json(login_request("root@x.com", "changeme1", AccountType::Admin)),
    )
    .await
    .expect("Admin login failed");

    assert_eq!(resp.data.role, "admin");
    assert!(resp.data.roll_number.is_none());

    let claims = state
        .get_jwt_service()
        .validate_token(&resp.data.token)
        .expect("Token should decode");
    assert_eq!(claims.role, Role::Admin);

    // The same email does not exist in the member partition
    let err = login(
        State(state.clone()),
        Json(login_request("root@x.com", "changeme1", AccountType::User)),
    )
    .await
    .expect_err("Admin email must not resolve in the user partition");
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[test]
fn unknown_account_type_falls_back_to_user() {
    let req: LoginRequest =
        serde_json::from_str(r#"{"email":"a@x.com","password":"p","accountType":"weird"}"#)
            .unwrap();
    assert_eq!(req.account_type, AccountType::User);

    let req: LoginRequest =
        serde_json::from_str(r#"{"email":"a@x.com","password":"p"}"#).unwrap();
    assert_eq!(req.account_type, AccountType::User);

    let req: LoginRequest =
        serde_json::from_str(r#"{"email":"a@x.com","password":"p","accountType":"admin"}"#)
            .unwrap();
    assert_eq!(req.account_type, AccountType::Admin);
}

#[tokio::test]
async fn register_rejects_empty_inputs() {
    let (state, _tmp) = common::test_state().await;

    let mut req = register_request("a@x.com", "R1");
    req.full_name = "  ".to_string();
    let err = register(State(state.clone()), Json(req))
        .await
        .expect_err("Blank name must fail");
    assert!(matches!(err, AppError::Validation(_)));

    let mut req = register_request("not-an-email", "R1");
    req.full_name = "A".to_string();
    let err = register(State(state.clone()), Json(req))
        .await
        .expect_err("Malformed email must fail");
    assert!(matches!(err, AppError::Validation(_)));
}
