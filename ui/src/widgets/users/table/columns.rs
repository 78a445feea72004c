//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const DATE_WIDTH: f32 = 100.0;
pub const AVATAR_WIDTH: f32 = 80.0;
pub const STUDENT_ID_WIDTH: f32 = 110.0;
pub const FLAG_WIDTH: f32 = 60.0;
pub const DELETE_WIDTH: f32 = 70.0;
pub const ROW_HEIGHT: f32 = 36.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration for the users table.
///
/// Order matches [`super::header::HEADERS`].
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(DATE_WIDTH),         // Date created
        Column::exact(AVATAR_WIDTH),       // User image
        Column::auto().at_least(120.0),    // Username
        Column::auto().at_least(180.0),    // Email
        Column::exact(STUDENT_ID_WIDTH),   // StudentId
        Column::exact(FLAG_WIDTH),         // Admin
        Column::exact(FLAG_WIDTH),         // Alumni
        Column::exact(DELETE_WIDTH),       // Delete
    ]
}
