//! Event Repository

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Event, EventCreate, EventStats};

#[derive(Clone)]
pub struct EventRepository {
    base: BaseRepository,
}

impl EventRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new event
    pub async fn create(&self, data: EventCreate) -> RepoResult<Event> {
        let mut result = self
            .base
            .db()
            .query("CREATE event SET name = $name, date = $date RETURN AFTER")
            .bind(("name", data.name))
            .bind(("date", data.date))
            .await?;
        let created: Option<Event> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create event".to_string()))
    }

    /// Grouped participation counts over `ids`, split at `now_ms`
    ///
    /// upcoming 计 `date > $now`、completed 计 `date < $now`，严格不等号：
    /// 恰好等于边界时刻的活动两边都不计。空集合直接返回零值，不发查询。
    pub async fn participation_stats(
        &self,
        ids: &[RecordId],
        now_ms: i64,
    ) -> RepoResult<EventStats> {
        if ids.is_empty() {
            return Ok(EventStats::default());
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    count() AS registered_events,
                    count(date > $now) AS upcoming_events,
                    count(date < $now) AS completed_events
                FROM event WHERE id IN $ids GROUP ALL"#,
            )
            .bind(("ids", ids.to_vec()))
            .bind(("now", now_ms))
            .await?;

        let stats: Option<EventStats> = result.take(0)?;
        Ok(stats.unwrap_or_default())
    }
}
