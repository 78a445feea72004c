//! Main panel for the admin users view.
//!
//! Uses a Typora-like table style with clean borders and minimal styling.

use egui::{Color32, Frame, Margin, Response, Stroke, Ui};
use log::warn;
use roster_business::{UserListState, UsersDispatcher, Viewer};

use super::modals::show_delete_confirm_modal;
use super::table::users_table;

/// Placeholder shown when there is no table to draw.
pub const NO_STUDENTS_TEXT: &str = "You have no students yet!";

/// Border color for Typora-like table style (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Displays the users panel for `viewer`.
///
/// Loads the first page whenever the viewer is an admin the list was not yet
/// loaded for, including an admin who comes back after another viewer.
/// Non-admins only ever see the placeholder.
pub fn dash_users_panel(
    viewer: &Viewer,
    users: &mut UserListState,
    dispatcher: &mut UsersDispatcher,
    ui: &mut Ui,
) -> Response {
    dispatcher.set_repaint_context(ui.ctx());
    poll_users_responses(users, dispatcher);

    users.observe_viewer(viewer);
    if users.needs_load(viewer) {
        dispatcher.load(users, viewer);
    }

    let response = ui.vertical(|ui| {
        if users.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading students...");
            });
        }

        if !users.shows_table(viewer) {
            ui.label(NO_STUDENTS_TEXT);
            return;
        }

        let delete_requested = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                egui::ScrollArea::horizontal().show(ui, |ui| users_table(ui, users.users()))
                    .inner
            })
            .inner;

        if let Some(id) = delete_requested {
            users.request_delete(id);
        }

        if users.has_more() {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Show more").clicked() {
                    dispatcher.load_more(users);
                }
                if users.is_loading_more() {
                    ui.spinner();
                }
            });
        }
    });

    if users.is_confirm_open() {
        show_delete_confirm_modal(users, dispatcher, ui);
    }

    response.response
}

/// Apply finished backend calls and log the failures among them.
/// Call this in the update loop.
pub fn poll_users_responses(users: &mut UserListState, dispatcher: &UsersDispatcher) {
    for failure in dispatcher.poll(users) {
        warn!("{failure}");
    }
}
