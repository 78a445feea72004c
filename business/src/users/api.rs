//! Backend calls for the users view.
//!
//! Both calls carry the configured session credentials. Failures come back
//! as [`UsersApiError`] so callers decide how to report them.

use log::{debug, info};

use crate::BusinessConfig;
use crate::http::Client;
use crate::users::model::{ListUsersResponse, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsersApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error(
        "API returned status: {status}{}",
        message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default()
    )]
    Status { status: u16, message: Option<String> },

    /// A 2xx response whose body could not be read.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl UsersApiError {
    /// The message the backend attached to a failed response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

pub type ApiResult<T> = Result<T, UsersApiError>;

/// `GET /server/student/getusers[?startIndex=N]`
///
/// The first page is requested without `startIndex`.
pub async fn list_users(config: &BusinessConfig, start_index: usize) -> ApiResult<Vec<UserRecord>> {
    let mut request = Client::get(config.users_url()).credentials(config.session_cookie());
    if start_index > 0 {
        request = request.query("startIndex", start_index);
    }

    info!("Fetching users from {}", request.full_url());

    let response = request
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.message))?;

    if !response.is_success() {
        return Err(UsersApiError::Status {
            status: response.status,
            message: response.message(),
        });
    }

    let page: ListUsersResponse = response
        .json()
        .map_err(|e| UsersApiError::Decode(e.to_string()))?;

    debug!(
        "Fetched {} users starting at index {start_index}",
        page.users.len()
    );
    Ok(page.users)
}

/// `DELETE /server/student/delete/{id}`
///
/// Success is implied by a 2xx status; the body is ignored.
pub async fn delete_user(config: &BusinessConfig, id: &str) -> ApiResult<()> {
    let url = config.delete_url(id);
    info!("Deleting user {id}");

    let response = Client::delete(url)
        .credentials(config.session_cookie())
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.message))?;

    if !response.is_success() {
        return Err(UsersApiError::Status {
            status: response.status,
            message: response.message(),
        });
    }

    debug!("User {id} deleted");
    Ok(())
}
