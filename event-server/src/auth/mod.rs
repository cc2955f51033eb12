//! 认证模块
//!
//! JWT 会话令牌签发/验证与口令哈希。

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, Role};
