//! Event Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Event ID type
pub type EventId = RecordId;

/// Event model matching the `event` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EventId>,
    pub name: String,
    /// 活动时间 (epoch 毫秒)
    pub date: i64,
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub name: String,
    pub date: i64,
}

/// Participation counts over a set of events, split at an instant
///
/// upcoming 取严格大于、completed 取严格小于：恰好落在边界时刻的活动
/// 两边都不计。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventStats {
    pub registered_events: u64,
    pub upcoming_events: u64,
    pub completed_events: u64,
}
