mod session_bar;
pub mod users;

pub use session_bar::{backend_origin, viewer_badge};
pub use users::{dash_users_panel, poll_users_responses};
