//! Student Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, CredentialStore, RepoError, RepoResult};
use crate::auth::Role;
use crate::db::models::{Account, Student, StudentCreate};

#[derive(Clone)]
pub struct StudentRepository {
    base: BaseRepository,
}

impl StudentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Combined existence probe over both unique attributes
    ///
    /// 注册去重的友好提示路径；真正的防线是存储层唯一索引。
    pub async fn find_by_email_or_roll(
        &self,
        email: &str,
        roll_number: &str,
    ) -> RepoResult<Option<Student>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM student WHERE email = $email OR roll_number = $roll_number LIMIT 1")
            .bind(("email", email.to_string()))
            .bind(("roll_number", roll_number.to_string()))
            .await?;
        let students: Vec<Student> = result.take(0)?;
        Ok(students.into_iter().next())
    }

    /// Find student by id ("student:…")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Student>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let student: Option<Student> = self.base.db().select(thing).await?;
        Ok(student)
    }

    /// Create a new student
    ///
    /// 口令在入库前做单向哈希；原文不落地。唯一索引冲突以
    /// [`RepoError::Duplicate`] 返回。
    pub async fn create(&self, data: StudentCreate) -> RepoResult<Student> {
        let hash_pass = Student::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE student SET
                    full_name = $full_name,
                    email = $email,
                    roll_number = $roll_number,
                    hash_pass = $hash_pass,
                    events = [],
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("full_name", data.full_name))
            .bind(("email", data.email))
            .bind(("roll_number", data.roll_number))
            .bind(("hash_pass", hash_pass))
            .bind(("created_at", chrono::Utc::now().timestamp_millis()))
            .await?;

        let created: Option<Student> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create student".to_string()))
    }

    /// Attach an event to the student's participation list
    ///
    /// 由活动报名流程调用；认证核心不改写身份记录。
    pub async fn add_event(&self, id: &str, event: RecordId) -> RepoResult<Student> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET events += $event RETURN AFTER")
            .bind(("thing", thing))
            .bind(("event", event))
            .await?;
        result
            .take::<Option<Student>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Student {} not found", id)))
    }
}

impl CredentialStore for StudentRepository {
    const ROLE: Role = Role::User;

    async fn find_credentials(&self, email: &str) -> RepoResult<Option<Account>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM student WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let students: Vec<Student> = result.take(0)?;
        Ok(students.into_iter().next().map(Account::from))
    }
}
