//! 统一错误处理
//!
//! 提供应用级错误类型和 HTTP 响应映射。响应体保持既有前端依赖的
//! 旧格式，不同错误的字段形状并不统一 (重复注册是裸 `{message}`，
//! 其余带 `success` 标志)，不要"顺手"归一化。
//!
//! | 错误 | HTTP 状态码 | 响应体 |
//! |------|------------|--------|
//! | Validation | 400 | `{success, message}` |
//! | Duplicate | 400 | `{message}` |
//! | InvalidCredentials | 401 | `{success, message}` (固定文案) |
//! | Unauthorized / TokenExpired / InvalidToken | 401 | `{success, message}` |
//! | NotFound | 404 | `{success, message}` |
//! | Database / Internal | 500 | `{success, message}` |
//! | InternalContext | 500 | `{success, message, error}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (401) ==========
    #[error("Authentication required")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 登录失败 - 故意不区分"账号不存在"和"口令错误"
    #[error("Invalid email or password")]
    InvalidCredentials,

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Duplicate identity: {0}")]
    Duplicate(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== 系统错误 (500) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("{message}: {detail}")]
    InternalContext { message: String, detail: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // Authentication errors (401)
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": "Not authorized, no token" }),
            ),
            AppError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": "Token expired" }),
            ),
            AppError::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": "Invalid token" }),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": "Invalid email or password" }),
            ),

            // Not found (404)
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": msg }),
            ),

            // Duplicate identity (400) - 裸 message 体
            AppError::Duplicate(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "message": msg }))
            }

            // Validation (400)
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": msg }),
            ),

            // Database errors (500)
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "message": msg }),
                )
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "message": msg }),
                )
            }

            // Internal errors with a stable outer message (500)
            AppError::InternalContext { message, detail } => {
                error!(target: "internal", error = %detail, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "message": message, "error": detail }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// 登录失败统一错误 - 防止账号枚举
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn internal_context(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InternalContext {
            message: message.into(),
            detail: detail.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Duplicate(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;
