//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine). Schema is defined at startup;
//! uniqueness of `email` and `roll_number` is enforced by UNIQUE indexes in
//! the store itself, independent of any application-level pre-check.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// 表结构与唯一索引
///
/// student / admin 是两个独立分区，各自带唯一约束。
const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS student SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS student_email ON student FIELDS email UNIQUE;
    DEFINE INDEX IF NOT EXISTS student_roll_number ON student FIELDS roll_number UNIQUE;

    DEFINE TABLE IF NOT EXISTS admin SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS admin_email ON admin FIELDS email UNIQUE;

    DEFINE TABLE IF NOT EXISTS event SCHEMALESS;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply the schema
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("quad")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!("Database connection established (SurrealDB RocksDB engine)");

        Ok(Self { db })
    }
}
