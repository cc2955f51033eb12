//! Authentication Handlers
//!
//! Handles registration and login, and issues session tokens.

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};

use crate::auth::Role;
use crate::core::ServerState;
use crate::db::models::{Account, StudentCreate};
use crate::db::repository::{
    AdminRepository, CredentialStore, RepoError, StudentRepository,
};
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_required_text,
};

// Re-use shared DTOs for API consistency
use shared::client::{
    AccountType, LoginData, LoginRequest, LoginResponse, RegisterData, RegisterRequest,
    RegisterResponse,
};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// 重复注册的统一文案 (前端按原文匹配，勿改)
const DUPLICATE_IDENTITY_MSG: &str = "User already exists with this email or student ID";

/// Registration handler
///
/// Creates a student account and returns it together with a session token.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    validate_required_text(&req.full_name, "fullName", MAX_NAME_LEN)?;
    validate_email(&req.email)?;
    validate_required_text(&req.roll_number, "rollNumber", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;

    let email = req.email.trim().to_lowercase();
    let repo = StudentRepository::new(state.get_db());

    // Combined existence probe over both unique attributes
    if repo
        .find_by_email_or_roll(&email, &req.roll_number)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .is_some()
    {
        return Err(AppError::duplicate(DUPLICATE_IDENTITY_MSG));
    }

    // The UNIQUE indexes settle concurrent duplicates: a store-level
    // rejection here is the same outcome as the probe above.
    let student = match repo
        .create(StudentCreate {
            full_name: req.full_name,
            email,
            roll_number: req.roll_number,
            password: req.password,
        })
        .await
    {
        Ok(s) => s,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::duplicate(DUPLICATE_IDENTITY_MSG));
        }
        Err(e) => return Err(AppError::database(e.to_string())),
    };

    let user_id = student.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .issue(&user_id, Role::User)
        .map_err(|e| AppError::internal(format!("Failed to issue token: {}", e)))?;

    tracing::info!(
        user_id = %user_id,
        email = %student.email,
        "Student registered"
    );

    let response = RegisterResponse {
        success: true,
        data: RegisterData {
            id: user_id,
            full_name: student.full_name,
            email: student.email,
            roll_number: student.roll_number,
            token,
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login handler
///
/// Authenticates credentials against the partition selected by
/// `accountType` and returns the identity plus a session token carrying the
/// partition's intrinsic role.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    validate_email(&req.email)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;

    let email = req.email.trim().to_lowercase();
    let db = state.get_db();

    let (account, role) = match req.account_type {
        AccountType::Admin => {
            authenticate(&AdminRepository::new(db), &email, &req.password).await?
        }
        AccountType::User => {
            authenticate(&StudentRepository::new(db), &email, &req.password).await?
        }
    };

    let token = state
        .get_jwt_service()
        .issue(&account.id, role)
        .map_err(|e| AppError::internal(format!("Failed to issue token: {}", e)))?;

    tracing::info!(
        user_id = %account.id,
        role = %role,
        "User logged in successfully"
    );

    let response = LoginResponse {
        success: true,
        data: LoginData {
            id: account.id,
            full_name: account.full_name,
            email: account.email,
            roll_number: account.roll_number,
            events: account.events,
            created_at: account.created_at,
            role: role.as_str().to_string(),
            token,
        },
    };

    Ok(Json(response))
}

/// Check credentials against one account partition
///
/// "账号不存在"和"口令错误"走同一个出口，响应完全一致。
async fn authenticate<S: CredentialStore>(
    store: &S,
    email: &str,
    password: &str,
) -> Result<(Account, Role), AppError> {
    let account = store
        .find_credentials(email)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(account) = account else {
        tracing::warn!(email = %email, "Login failed - account not found");
        return Err(AppError::invalid_credentials());
    };

    let password_valid = account
        .verify_password(password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        tracing::warn!(email = %email, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    Ok((account, S::ROLE))
}
