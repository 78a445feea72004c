//! Admin users view.
//!
//! - `panel`: Main panel widget and result polling
//! - `modals`: Delete confirmation dialog
//! - `table`: Table rendering components (columns, header, row, cells)

mod modals;
mod panel;
pub mod table;

pub use panel::{NO_STUDENTS_TEXT, dash_users_panel, poll_users_responses};
