//! Profile projection and event aggregation tests
//! Run: cargo test -p event-server --test profile_stats

mod common;

use axum::{Extension, Json};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use event_server::api::auth::handler::register;
use event_server::api::profile::handler::profile;
use event_server::auth::CurrentUser;
use event_server::db::models::EventCreate;
use event_server::db::repository::{EventRepository, StudentRepository};
use event_server::{AppError, Role};
use shared::client::RegisterRequest;

async fn register_student(state: &event_server::ServerState, email: &str, roll: &str) -> String {
    let (_, Json(resp)) = register(
        State(state.clone()),
        Json(RegisterRequest {
            full_name: "Ada".to_string(),
            email: email.to_string(),
            roll_number: roll.to_string(),
            password: "p1".to_string(),
        }),
    )
    .await
    .expect("Registration failed");
    resp.data.id
}

#[tokio::test]
async fn profile_with_zero_events_returns_zero_counts() {
    let (state, _tmp) = common::test_state().await;
    let id = register_student(&state, "ada@x.com", "R1").await;

    let Json(p) = profile(
        State(state.clone()),
        Extension(CurrentUser {
            id,
            role: Role::User,
        }),
    )
    .await
    .expect("Profile fetch failed");

    assert_eq!(p.full_name, "Ada");
    assert_eq!(p.email, "ada@x.com");
    assert_eq!(p.student_id, "R1");
    assert_eq!(p.registered_events, 0);
    assert_eq!(p.upcoming_events, 0);
    assert_eq!(p.completed_events, 0);

    // joinedDate is a well-formed RFC 3339 timestamp
    chrono::DateTime::parse_from_rfc3339(&p.joined_date).expect("joinedDate must parse");
}

#[tokio::test]
async fn profile_counts_split_past_and_future_events() {
    let (state, _tmp) = common::test_state().await;
    let id = register_student(&state, "ada@x.com", "R1").await;

    let events = EventRepository::new(state.get_db());
    let students = StudentRepository::new(state.get_db());

    let now = chrono::Utc::now().timestamp_millis();
    let past = events
        .create(EventCreate {
            name: "Orientation".to_string(),
            date: now - 86_400_000,
        })
        .await
        .unwrap();
    let future = events
        .create(EventCreate {
            name: "Hackathon".to_string(),
            date: now + 86_400_000,
        })
        .await
        .unwrap();

    students.add_event(&id, past.id.unwrap()).await.unwrap();
    students.add_event(&id, future.id.unwrap()).await.unwrap();

    let Json(p) = profile(
        State(state.clone()),
        Extension(CurrentUser {
            id,
            role: Role::User,
        }),
    )
    .await
    .expect("Profile fetch failed");

    assert_eq!(p.registered_events, 2);
    assert_eq!(p.upcoming_events, 1);
    assert_eq!(p.completed_events, 1);
}

#[tokio::test]
async fn event_at_boundary_instant_counts_in_neither_bucket() {
    let (state, _tmp) = common::test_state().await;

    let events = EventRepository::new(state.get_db());
    let now = 1_750_000_000_000i64;

    let before = events
        .create(EventCreate {
            name: "past".to_string(),
            date: now - 1,
        })
        .await
        .unwrap();
    let exact = events
        .create(EventCreate {
            name: "boundary".to_string(),
            date: now,
        })
        .await
        .unwrap();
    let after = events
        .create(EventCreate {
            name: "future".to_string(),
            date: now + 1,
        })
        .await
        .unwrap();

    let ids = vec![before.id.unwrap(), exact.id.unwrap(), after.id.unwrap()];
    let stats = events.participation_stats(&ids, now).await.unwrap();

    assert_eq!(stats.registered_events, 3);
    assert_eq!(stats.upcoming_events, 1);
    assert_eq!(stats.completed_events, 1);
}

#[tokio::test]
async fn empty_id_set_skips_the_query() {
    let (state, _tmp) = common::test_state().await;

    let events = EventRepository::new(state.get_db());
    let stats = events.participation_stats(&[], 0).await.unwrap();

    assert_eq!(stats.registered_events, 0);
    assert_eq!(stats.upcoming_events, 0);
    assert_eq!(stats.completed_events, 0);
}

#[tokio::test]
async fn profile_of_unknown_subject_is_not_found() {
    let (state, _tmp) = common::test_state().await;

    let err = profile(
        State(state.clone()),
        Extension(CurrentUser {
            id: "student:doesnotexist".to_string(),
            role: Role::User,
        }),
    )
    .await
    .expect_err("Unknown subject must fail");

    assert!(matches!(&err, AppError::NotFound(_)));
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}
