//! Top bar widgets describing the current session.

use egui::{Response, Ui};
use roster_business::{BusinessConfig, Viewer};

use crate::utils::colors::COLOR_GREEN;

/// Shows who is signed in, tagging admins.
pub fn viewer_badge(viewer: &Viewer, ui: &mut Ui) -> Response {
    if viewer.id.is_empty() {
        return ui.weak("Not signed in");
    }

    ui.horizontal(|ui| {
        ui.label(format!("Signed in as {}", viewer.id));
        if viewer.is_admin {
            ui.colored_label(COLOR_GREEN, "admin");
        }
    })
    .response
}

/// Shows which backend the app talks to.
pub fn backend_origin(config: &BusinessConfig, ui: &mut Ui) -> Response {
    let origin = if config.backend_url.is_empty() {
        "same origin"
    } else {
        config.backend_url.as_str()
    };
    ui.weak(format!("Backend: {origin}"))
}

#[cfg(test)]
mod session_bar_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    #[test]
    fn test_anonymous_viewer_is_not_signed_in() {
        let harness = Harness::new_ui(|ui| {
            viewer_badge(&Viewer::anonymous(), ui);
        });

        assert!(harness.query_by_label("Not signed in").is_some());
    }

    #[test]
    fn test_admin_viewer_is_tagged() {
        let harness = Harness::new_ui(|ui| {
            viewer_badge(&Viewer::admin("root"), ui);
        });

        assert!(harness.query_by_label("Signed in as root").is_some());
        assert!(harness.query_by_label("admin").is_some());
    }

    #[test]
    fn test_member_viewer_is_not_tagged() {
        let harness = Harness::new_ui(|ui| {
            viewer_badge(&Viewer::member("alice"), ui);
        });

        assert!(harness.query_by_label("Signed in as alice").is_some());
        assert!(harness.query_by_label("admin").is_none());
    }

    #[test]
    fn test_backend_origin_labels() {
        let harness = Harness::new_ui(|ui| {
            backend_origin(&BusinessConfig::new("http://127.0.0.1:3000"), ui);
            backend_origin(&BusinessConfig::new(""), ui);
        });

        assert!(
            harness
                .query_by_label("Backend: http://127.0.0.1:3000")
                .is_some()
        );
        assert!(harness.query_by_label("Backend: same origin").is_some());
    }
}
