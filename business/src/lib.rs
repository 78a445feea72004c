//! Business layer for the roster admin users view.

mod config;
pub mod http;
mod session;
pub mod users;

pub use config::{BusinessConfig, ConfigError};
pub use session::Viewer;
pub use users::{
    ApiResult, ListUsersResponse, PAGE_SIZE, UserListState, UserRecord, UsersApiError,
    UsersDispatcher, UsersEvent, UsersFailure, UsersOperation, ViewState,
};
