//! State for the users view.
//!
//! UI code stays "dumb": it reads this state, renders it, and calls the
//! transition methods. Network results arrive as [`UsersEvent`] values and are
//! folded in with [`UserListState::apply`], which hands failures back to the
//! caller instead of swallowing them.

use log::debug;
use ustr::Ustr;

use crate::Viewer;
use crate::users::api::{ApiResult, UsersApiError};
use crate::users::model::{UserRecord, page_is_full};

/// Which of the three view states is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Placeholder text: the viewer is not an admin, or nothing is loaded.
    Empty,
    /// The records table.
    Listing,
    /// The delete confirmation dialog, drawn over the list or placeholder.
    Confirming,
}

/// A finished backend call, ready to be applied to [`UserListState`].
#[derive(Debug, Clone, PartialEq)]
pub enum UsersEvent {
    /// The first page, fetched on behalf of `viewer`.
    FirstPage {
        viewer: Ustr,
        result: ApiResult<Vec<UserRecord>>,
    },
    /// A follow-up page requested at `start_index`.
    NextPage {
        start_index: usize,
        result: ApiResult<Vec<UserRecord>>,
    },
    /// A delete request for `id`.
    Deleted { id: Ustr, result: ApiResult<()> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersOperation {
    Load,
    LoadMore,
    Delete,
}

/// A failed operation, surfaced to the caller's error policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersFailure {
    pub operation: UsersOperation,
    pub error: UsersApiError,
}

impl std::fmt::Display for UsersFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.operation {
            UsersOperation::Load => "load users",
            UsersOperation::LoadMore => "load more users",
            UsersOperation::Delete => "delete user",
        };
        write!(f, "failed to {op}: {}", self.error)
    }
}

#[derive(Debug, Clone)]
pub struct UserListState {
    users: Vec<UserRecord>,
    has_more: bool,
    pending_delete: Option<Ustr>,
    confirm_open: bool,
    /// Viewer id seen on the last frame, admin or not.
    observed: Option<Ustr>,
    /// Viewer the current list was requested for. Cleared on any identity change.
    loaded_for: Option<Ustr>,
    is_loading: bool,
    is_loading_more: bool,
    deletes_in_flight: usize,
}

impl Default for UserListState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            // Offered until a short page proves otherwise.
            has_more: true,
            pending_delete: None,
            confirm_open: false,
            observed: None,
            loaded_for: None,
            is_loading: false,
            is_loading_more: false,
            deletes_in_flight: 0,
        }
    }
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn pending_delete(&self) -> Option<Ustr> {
        self.pending_delete
    }

    pub fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    /// True while at least one delete request has not answered yet.
    pub fn is_deleting(&self) -> bool {
        self.deletes_in_flight > 0
    }

    /// The view state for `viewer`.
    pub fn view(&self, viewer: &Viewer) -> ViewState {
        if self.confirm_open {
            ViewState::Confirming
        } else if self.shows_table(viewer) {
            ViewState::Listing
        } else {
            ViewState::Empty
        }
    }

    /// Whether the records table is drawn for `viewer`.
    pub fn shows_table(&self, viewer: &Viewer) -> bool {
        viewer.is_admin && !self.users.is_empty()
    }

    /// Note who is looking at the view.
    ///
    /// Any change of identity, including to or from a non-admin, forgets the
    /// loaded list's owner so the next admin viewer fetches a fresh first page.
    /// A first page still in flight for the previous viewer is dropped on arrival.
    pub fn observe_viewer(&mut self, viewer: &Viewer) {
        if self.observed == Some(viewer.id) {
            return;
        }
        debug!("Viewer changed to {}", viewer.id);
        self.observed = Some(viewer.id);
        self.loaded_for = None;
        self.is_loading = false;
    }

    /// True when `viewer` is an admin and no first page has been requested for them.
    ///
    /// A change of viewer identity makes this true again.
    pub fn needs_load(&self, viewer: &Viewer) -> bool {
        viewer.is_admin && self.loaded_for != Some(viewer.id)
    }

    /// Record that the first page is being fetched for `viewer`.
    pub fn begin_load(&mut self, viewer: &Viewer) {
        self.observed = Some(viewer.id);
        self.loaded_for = Some(viewer.id);
        self.is_loading = true;
    }

    /// Offset for the next page: the number of records already loaded.
    pub fn next_start_index(&self) -> usize {
        self.users.len()
    }

    pub fn begin_load_more(&mut self) -> usize {
        self.is_loading_more = true;
        self.next_start_index()
    }

    /// Mark `id` for deletion and open the confirmation, replacing any earlier choice.
    pub fn request_delete(&mut self, id: Ustr) {
        self.pending_delete = Some(id);
        self.confirm_open = true;
    }

    /// Dismiss the confirmation without deleting.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.confirm_open = false;
    }

    /// The id to delete on confirmation, if the dialog is open.
    pub fn begin_delete(&mut self) -> Option<Ustr> {
        if !self.confirm_open {
            return None;
        }
        let id = self.pending_delete?;
        self.deletes_in_flight += 1;
        Some(id)
    }

    /// Fold a finished call into the state.
    ///
    /// Returns the failure, if any, so the caller can apply its own policy.
    pub fn apply(&mut self, event: UsersEvent) -> Option<UsersFailure> {
        match event {
            UsersEvent::FirstPage { viewer, result } => {
                if self.loaded_for != Some(viewer) {
                    debug!("Dropping first page fetched for previous viewer {viewer}");
                    return None;
                }
                self.is_loading = false;
                match result {
                    Ok(page) => {
                        self.has_more = page_is_full(page.len());
                        self.users = page;
                        None
                    }
                    Err(error) => Some(UsersFailure {
                        operation: UsersOperation::Load,
                        error,
                    }),
                }
            }
            UsersEvent::NextPage {
                start_index,
                result,
            } => {
                self.is_loading_more = false;
                match result {
                    Ok(page) => {
                        debug!(
                            "Appending {} users requested at index {start_index}",
                            page.len()
                        );
                        if !page_is_full(page.len()) {
                            self.has_more = false;
                        }
                        self.users.extend(page);
                        None
                    }
                    Err(error) => Some(UsersFailure {
                        operation: UsersOperation::LoadMore,
                        error,
                    }),
                }
            }
            UsersEvent::Deleted { id, result } => {
                let targets_pending = self.pending_delete == Some(id);
                self.deletes_in_flight = self.deletes_in_flight.saturating_sub(1);
                match result {
                    Ok(()) => {
                        self.users.retain(|user| user.id != id);
                        if targets_pending {
                            self.pending_delete = None;
                            self.confirm_open = false;
                        }
                        None
                    }
                    Err(error) => Some(UsersFailure {
                        operation: UsersOperation::Delete,
                        error,
                    }),
                }
            }
        }
    }
}
