//! Student Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::auth::password;

/// Student ID type
pub type StudentId = RecordId;

/// Student model matching the `student` table
///
/// `hash_pass` 只进不出：反序列化自数据库，永不序列化到响应。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<StudentId>,
    pub full_name: String,
    pub email: String,
    pub roll_number: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    /// 已报名活动的关联 (由活动报名流程维护)
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub events: Vec<RecordId>,
    pub created_at: i64,
}

/// Create student payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCreate {
    pub full_name: String,
    pub email: String,
    pub roll_number: String,
    pub password: String,
}

impl Student {
    /// Verify a raw password against the stored hash
    pub fn verify_password(&self, raw: &str) -> Result<bool, argon2::password_hash::Error> {
        password::verify_password(raw, &self.hash_pass)
    }

    /// Hash a raw password for storage
    pub fn hash_password(raw: &str) -> Result<String, argon2::password_hash::Error> {
        password::hash_password(raw)
    }
}
