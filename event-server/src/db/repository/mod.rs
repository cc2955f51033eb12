//! Repository Module
//!
//! Provides data access over the SurrealDB tables.

pub mod admin;
pub mod event;
pub mod student;

// Re-exports
pub use admin::AdminRepository;
pub use event::EventRepository;
pub use student::StudentRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::auth::Role;
use crate::db::models::Account;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // 唯一索引冲突 ("Database index `…` already contains …") 映射为
        // Duplicate，其余归为 Database
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Credential lookup over one account partition
///
/// student 和 admin 两个分区实现同一个接口；调用方按 [`shared::client::AccountType`]
/// 枚举选择实现。分区的固有角色由 `ROLE` 常量给出，不从请求推断。
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// The role intrinsic to this partition
    const ROLE: Role;

    /// Find the credentials record matching `email`, if any
    async fn find_credentials(&self, email: &str) -> RepoResult<Option<Account>>;
}
