//! Modal dialogs for the users view.

use egui::{Align2, RichText, Ui, Window};
use roster_business::{UserListState, UsersDispatcher};

use crate::utils::colors::COLOR_RED;

pub const CONFIRM_DELETE_TEXT: &str = "Are you sure you want to delete this student?";

/// Shows the delete confirmation for the pending record.
///
/// Closing the window counts as "No, cancel".
pub fn show_delete_confirm_modal(
    users: &mut UserListState,
    dispatcher: &UsersDispatcher,
    ui: &mut Ui,
) {
    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;

    Window::new("Delete student")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("⚠").size(32.0).color(COLOR_RED));
                ui.add_space(4.0);
                ui.label(CONFIRM_DELETE_TEXT);
                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("Yes, I'm sure").color(COLOR_RED))
                        .clicked()
                    {
                        confirmed = true;
                    }
                    if ui.button("No, cancel").clicked() {
                        cancelled = true;
                    }
                    if users.is_deleting() {
                        ui.spinner();
                    }
                });
            });
        });

    if confirmed {
        dispatcher.confirm_delete(users);
    }
    if cancelled || !open {
        users.cancel_delete();
    }
}
