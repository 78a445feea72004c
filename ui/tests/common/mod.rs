use std::time::Duration;

use egui_kittest::Harness;
use roster_business::Viewer;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::MockServer;

/// How long to yield to spawned requests between frames.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 20;

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl<'a> TestCtx<'a, State> {
    /// A harness rendering `app` over a state pointed at `mock_server`.
    ///
    /// Mount the mocks before the first `step`, which is when the panel loads.
    #[allow(unused)]
    pub fn new(
        mock_server: MockServer,
        viewer: Viewer,
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
    ) -> Self {
        let state = State::test(mock_server.uri(), viewer);
        let harness = Harness::builder()
            .with_size(egui::vec2(1200.0, 900.0))
            .build_ui_state(app, state);

        Self {
            mock_server,
            harness,
        }
    }
}

impl<'a> TestCtx<'a, RosterApp> {
    #[allow(unused)]
    pub fn new_app(mock_server: MockServer, viewer: Viewer) -> Self {
        let app = RosterApp::new(State::test(mock_server.uri(), viewer));
        let harness = Harness::builder()
            .with_size(egui::vec2(1200.0, 900.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

pub async fn start_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

/// Renders the users panel the way the app's central panel does.
#[allow(unused)]
pub fn users_panel(ui: &mut egui::Ui, state: &mut State) {
    let State {
        viewer,
        users,
        dispatcher,
    } = state;
    roster_ui::widgets::dash_users_panel(viewer, users, dispatcher, ui);
}

/// `{ "users": [...] }` with `len` records whose ids are `{prefix}{i}`.
#[allow(unused)]
pub fn users_json(prefix: &str, len: usize) -> serde_json::Value {
    let users: Vec<serde_json::Value> = (0..len)
        .map(|i| {
            serde_json::json!({
                "_id": format!("{prefix}{i}"),
                "name": format!("Student {prefix}{i}"),
                "email": format!("{prefix}{i}@example.com"),
                "studentID": format!("S-{prefix}{i}"),
                "profilePicture": "https://cdn.example.com/avatar.png",
                "isAdmin": i == 0,
                "isAlumni": false,
                "createdAt": "2024-03-12T10:00:00.000Z"
            })
        })
        .collect();
    serde_json::json!({ "users": users })
}

/// Step frames, yielding to spawned requests, until `done` holds.
///
/// Returns whether `done` held before giving up.
pub async fn step_until<T>(harness: &mut Harness<'_, T>, done: impl Fn(&T) -> bool) -> bool {
    for _ in 0..100 {
        harness.step();
        if done(harness.state()) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(DEFAULT_NETWORK_WAIT_MS)).await;
    }
    false
}

/// Step a few frames with network yields in between, without a stop condition.
#[allow(unused)]
pub async fn settle<T>(harness: &mut Harness<'_, T>) {
    for _ in 0..5 {
        harness.step();
        tokio::time::sleep(Duration::from_millis(DEFAULT_NETWORK_WAIT_MS)).await;
    }
    harness.step();
}
