//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use roster_business::UserRecord;
use ustr::Ustr;

use super::cells::{render_avatar_cell, render_delete_link, render_flag_cell, render_text_cell};

/// Renders a single user row with all cells.
///
/// Returns the record's id if its delete link was clicked.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRecord) -> Option<Ustr> {
    let mut delete_requested = None;

    row.col(|ui| {
        render_text_cell(ui, &user.created_date());
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_avatar_cell(ui, &user.name, &user.profile_picture);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_text_cell(ui, &user.name);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_text_cell(ui, &user.email);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_text_cell(ui, &user.student_id);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_flag_cell(ui, user.is_admin);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_flag_cell(ui, user.is_alumni);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        if render_delete_link(ui) {
            delete_requested = Some(user.id);
        }
        draw_cell_bottom_border(ui);
    });

    delete_requested
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
