//! Account projection
//!
//! 登录路径使用的统一投影：两个账号分区 (student / admin) 的凭据记录
//! 映射到同一个形状，处理器不关心记录来自哪张表。

use super::{Admin, Student};
use crate::auth::password;

/// A credentials record from either account partition
///
/// 纯内存投影，不直接 (反)序列化；`hash_pass` 留在这里供口令比较，
/// 响应构造时不会带出。
#[derive(Debug, Clone)]
pub struct Account {
    /// "table:id" 形式的记录 ID
    pub id: String,
    pub full_name: String,
    pub email: String,
    /// 学号 - 仅 student 分区有
    pub roll_number: Option<String>,
    /// 已报名活动 id - 仅 student 分区有
    pub events: Option<Vec<String>>,
    pub created_at: i64,
    hash_pass: String,
}

impl Account {
    /// Verify a raw password against the stored hash
    pub fn verify_password(&self, raw: &str) -> Result<bool, argon2::password_hash::Error> {
        password::verify_password(raw, &self.hash_pass)
    }
}

impl From<Student> for Account {
    fn from(s: Student) -> Self {
        Self {
            id: s.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            full_name: s.full_name,
            email: s.email,
            roll_number: Some(s.roll_number),
            events: Some(s.events.iter().map(|e| e.to_string()).collect()),
            created_at: s.created_at,
            hash_pass: s.hash_pass,
        }
    }
}

impl From<Admin> for Account {
    fn from(a: Admin) -> Self {
        Self {
            id: a.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            full_name: a.full_name,
            email: a.email,
            roll_number: None,
            events: None,
            created_at: a.created_at,
            hash_pass: a.hash_pass,
        }
    }
}
