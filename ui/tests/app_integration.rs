//! Tests for the full app shell: top bar plus the users panel.

mod common;

use common::{TestCtx, settle, start_mock_server, step_until, users_json};
use kittest::Queryable;
use roster_business::Viewer;
use roster_ui::widgets::users::NO_STUDENTS_TEXT;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_app_shows_session_and_loads_users() {
    let mock_server = start_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/server/student/getusers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json("a", 2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = format!("Backend: {}", mock_server.uri());
    let mut ctx = TestCtx::new_app(mock_server, Viewer::admin("root"));
    let harness = ctx.harness_mut();

    assert!(
        step_until(harness, |app| app.state.users.users().len() == 2).await,
        "users should load inside the app"
    );
    harness.step();

    assert!(harness.query_by_label("Signed in as root").is_some());
    assert!(harness.query_by_label("admin").is_some());
    assert!(harness.query_by_label(&backend).is_some());
    assert!(harness.query_by_label("Students").is_some());
    assert!(harness.query_by_label("Student a1").is_some());
}

#[tokio::test]
async fn test_app_for_member_shows_placeholder() {
    let mock_server = start_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/server/student/getusers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json("a", 2)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::new_app(mock_server, Viewer::member("alice"));
    let harness = ctx.harness_mut();
    settle(harness).await;

    assert!(harness.query_by_label("Signed in as alice").is_some());
    assert!(harness.query_by_label("admin").is_none());
    assert!(harness.query_by_label(NO_STUDENTS_TEXT).is_some());
}
