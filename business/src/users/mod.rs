//! Users view domain module.
//!
//! - `model`: wire types and the page size
//! - `api`: backend calls returning typed results
//! - `state`: the list / pagination / delete-confirmation state machine
//! - `dispatcher`: spawns requests and feeds their results back to the state
//!
//! UI code under `ui/src/widgets/**` reads [`UserListState`] and calls the
//! dispatcher; it does not talk to the backend itself.

pub mod api;
pub mod dispatcher;
pub mod model;
pub mod state;

pub use api::{ApiResult, UsersApiError, delete_user, list_users};
pub use dispatcher::UsersDispatcher;
pub use model::{ListUsersResponse, PAGE_SIZE, UserRecord};
pub use state::{UserListState, UsersEvent, UsersFailure, UsersOperation, ViewState};
