//! Admin Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::auth::password;

/// Admin ID type
pub type AdminId = RecordId;

/// Admin model matching the `admin` table
///
/// 管理员分区与 student 分区完全独立，没有自助注册入口。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AdminId>,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub created_at: i64,
}

/// Create admin payload (seeding and administrative tooling)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreate {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl Admin {
    /// Verify a raw password against the stored hash
    pub fn verify_password(&self, raw: &str) -> Result<bool, argon2::password_hash::Error> {
        password::verify_password(raw, &self.hash_pass)
    }

    /// Hash a raw password for storage
    pub fn hash_password(raw: &str) -> Result<String, argon2::password_hash::Error> {
        password::hash_password(raw)
    }
}
