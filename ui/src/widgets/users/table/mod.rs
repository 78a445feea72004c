//! Table components for the users view.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::UserRecord;
use ustr::Ustr;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders every record in load order.
///
/// Returns the id of the record whose delete link was clicked this frame.
pub fn users_table(ui: &mut Ui, users: &[UserRecord]) -> Option<Ustr> {
    let mut delete_requested = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("dash_users_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|mut body| {
            for user in users {
                body.row(ROW_HEIGHT, |mut row| {
                    if let Some(id) = render_user_row(&mut row, user) {
                        delete_requested = Some(id);
                    }
                });
            }
        });

    delete_requested
}
