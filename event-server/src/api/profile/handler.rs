//! Profile Handlers
//!
//! Read-time projection over a student and their event participation.

use axum::{Extension, Json, extract::State};

use shared::client::ProfileResponse;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{EventRepository, StudentRepository};
use crate::utils::AppError;

/// 外层固定文案，细节放在 error 字段
const PROFILE_FETCH_MSG: &str = "Error fetching user profile";

/// Profile summary handler
///
/// The subject id comes from the validated session token, injected as
/// [`CurrentUser`] by the auth middleware. Counts are computed against the
/// current instant at read time; nothing is mutated or stored.
pub async fn profile(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ProfileResponse>, AppError> {
    let repo = StudentRepository::new(state.get_db());

    let student = repo
        .find_by_id(&user.id)
        .await
        .map_err(|e| AppError::internal_context(PROFILE_FETCH_MSG, e.to_string()))?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let now_ms = chrono::Utc::now().timestamp_millis();
    let stats = EventRepository::new(state.get_db())
        .participation_stats(&student.events, now_ms)
        .await
        .map_err(|e| AppError::internal_context(PROFILE_FETCH_MSG, e.to_string()))?;

    let joined_date = chrono::DateTime::from_timestamp_millis(student.created_at)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    Ok(Json(ProfileResponse {
        full_name: student.full_name,
        email: student.email,
        student_id: student.roll_number,
        joined_date,
        registered_events: stats.registered_events,
        upcoming_events: stats.upcoming_events,
        completed_events: stats.completed_events,
    }))
}
