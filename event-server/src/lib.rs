//! Quad Event Server - 校园活动平台认证后端
//!
//! # 架构概述
//!
//! 本模块是 Event Server 的主入口，提供以下核心功能：
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (student / admin / event)
//! - **HTTP API** (`api`): 注册、登录、个人资料接口
//!
//! # 模块结构
//!
//! ```text
//! event-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、口令哈希
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService, Role};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ____                  __
  / __ \__  ______ _____/ /
 / / / / / / / __ `/ __  /
/ /_/ / /_/ / /_/ / /_/ /
\___\_\__,_/\__,_/\__,_/
    "#
    );
}
