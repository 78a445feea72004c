//! Wire types for the student listing endpoints.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Number of records the backend returns per page.
///
/// A page shorter than this means there is nothing left to fetch.
pub const PAGE_SIZE: usize = 9;

/// A user account as returned by `GET /server/student/getusers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: Ustr,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "studentID", default)]
    pub student_id: String,
    /// Avatar image reference (usually a URL).
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    #[serde(rename = "isAlumni", default)]
    pub is_alumni: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Creation date as a local calendar date, or `-` when the backend omitted it.
    pub fn created_date(&self) -> String {
        match self.created_at {
            Some(created_at) => created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d")
                .to_string(),
            None => "-".to_owned(),
        }
    }
}

/// Body of `GET /server/student/getusers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserRecord>,
}

/// Whether a page of this length leaves more records on the server.
#[inline]
pub fn page_is_full(len: usize) -> bool {
    len >= PAGE_SIZE
}
