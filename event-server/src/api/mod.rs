//! API 路由模块
//!
//! # 结构
//!
//! - [`auth`] - 注册和登录接口
//! - [`profile`] - 个人资料接口
//! - [`health`] - 健康检查

pub mod auth;
pub mod health;
pub mod profile;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
