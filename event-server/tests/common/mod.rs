//! Shared helpers for integration tests
#![allow(dead_code)]

use event_server::{Config, ServerState};

/// Build a server state backed by a throwaway database
pub async fn test_state() -> (ServerState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("Failed to create tempdir");
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("Failed to initialize server state");
    (state, tmp)
}

/// Build a server state with a seeded admin account
pub async fn test_state_with_admin(
    email: &str,
    password: &str,
) -> (ServerState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("Failed to create tempdir");
    let mut config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    config.admin_email = Some(email.to_string());
    config.admin_password = Some(password.to_string());
    let state = ServerState::initialize(&config)
        .await
        .expect("Failed to initialize server state");
    (state, tmp)
}
