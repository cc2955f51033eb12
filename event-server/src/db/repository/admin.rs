//! Admin Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, CredentialStore, RepoError, RepoResult};
use crate::auth::Role;
use crate::db::models::{Account, Admin, AdminCreate};

#[derive(Clone)]
pub struct AdminRepository {
    base: BaseRepository,
}

impl AdminRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find admin by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM admin WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let admins: Vec<Admin> = result.take(0)?;
        Ok(admins.into_iter().next())
    }

    /// Create a new admin (seeding and administrative tooling)
    pub async fn create(&self, data: AdminCreate) -> RepoResult<Admin> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Admin '{}' already exists",
                data.email
            )));
        }

        let hash_pass = Admin::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE admin SET
                    full_name = $full_name,
                    email = $email,
                    hash_pass = $hash_pass,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("full_name", data.full_name))
            .bind(("email", data.email))
            .bind(("hash_pass", hash_pass))
            .bind(("created_at", chrono::Utc::now().timestamp_millis()))
            .await?;

        let created: Option<Admin> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin".to_string()))
    }
}

impl CredentialStore for AdminRepository {
    const ROLE: Role = Role::Admin;

    async fn find_credentials(&self, email: &str) -> RepoResult<Option<Account>> {
        Ok(self.find_by_email(email).await?.map(Account::from))
    }
}
