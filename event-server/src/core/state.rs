use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::models::AdminCreate;
use crate::db::repository::AdminRepository;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 使用 Arc 实现浅拷贝，每个请求处理器持有一份克隆。
/// 请求之间不共享任何可变内存状态；唯一的共享可变资源是数据库。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/quad.db) 及 schema (唯一索引)
    /// 3. JWT 服务 (密钥在配置加载时已确定)
    /// 4. 管理员种子账号 (如配置了 ADMIN_EMAIL / ADMIN_PASSWORD)
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("quad.db");
        let db_service = DbService::new(&db_path).await?;
        let db = db_service.db;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self {
            config: config.clone(),
            db,
            jwt_service,
        };

        state.seed_admin().await?;

        Ok(state)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 管理员账号种子
    ///
    /// 管理员没有自助注册入口；首次启动时从配置创建。
    /// 账号已存在时跳过。
    async fn seed_admin(&self) -> anyhow::Result<()> {
        let (Some(email), Some(password)) = (
            self.config.admin_email.clone(),
            self.config.admin_password.clone(),
        ) else {
            return Ok(());
        };

        let repo = AdminRepository::new(self.db.clone());
        if repo
            .find_by_email(&email)
            .await
            .map_err(|e| anyhow::anyhow!("Admin lookup failed: {e}"))?
            .is_some()
        {
            return Ok(());
        }

        repo.create(AdminCreate {
            full_name: self.config.admin_name.clone(),
            email: email.clone(),
            password,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Admin seeding failed: {e}"))?;

        tracing::info!(email = %email, "Seeded admin account");
        Ok(())
    }
}
